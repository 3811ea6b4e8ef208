use crate::{
    ast::BinaryOperator,
    error::ArithmeticError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary operator to two integers.
///
/// Addition, subtraction and multiplication are checked and report overflow
/// instead of wrapping. Division truncates toward zero. Division by zero is
/// checked before anything else, so `i64::MIN / 0` reports `DivisionByZero`
/// and `i64::MIN / -1` reports `Overflow`.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::BinaryOperator,
///     error::ArithmeticError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
/// assert_eq!(eval_binary(BinaryOperator::Mul, i64::MAX, 2),
///            Err(ArithmeticError::Overflow));
/// ```
pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            left.checked_div(right)
        },
    };

    result.ok_or(ArithmeticError::Overflow)
}
