use crate::{
    ast::Expr,
    error::ArithmeticError,
    interpreter::evaluator::binary::eval_binary,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ArithmeticError` describing the failure.
pub type EvalResult<T> = Result<T, ArithmeticError>;

/// Evaluates an expression tree to an integer.
///
/// The walk is depth-first and post-order: both operands of a binary node are
/// evaluated, left before right, before the operator is applied. The tree is
/// only borrowed and is never modified.
///
/// # Errors
/// - `DivisionByZero` if the right operand of a `/` evaluates to zero.
/// - `Overflow` if any intermediate result does not fit in an `i64`.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::{BinaryOperator, Expr},
///     error::ArithmeticError,
///     interpreter::evaluator::core::evaluate,
/// };
///
/// let tree = Expr::binary(Expr::literal(7), BinaryOperator::Div, Expr::literal(2));
/// assert_eq!(evaluate(&tree), Ok(3));
///
/// let tree = Expr::binary(Expr::literal(7), BinaryOperator::Div, Expr::literal(0));
/// assert_eq!(evaluate(&tree), Err(ArithmeticError::DivisionByZero));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Literal { value } => Ok(*value),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right)
        },
    }
}
