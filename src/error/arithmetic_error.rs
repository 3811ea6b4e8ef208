#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum ArithmeticError {
    /// Attempted division by zero.
    DivisionByZero,
    /// The result of an operation does not fit in an `i64`.
    Overflow,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for ArithmeticError {}
