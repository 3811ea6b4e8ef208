/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing an input
/// line: syntax mistakes, literals that do not fit in an `i64`, and inputs
/// rejected by the size guard.
pub mod parse_error;
/// Arithmetic errors.
///
/// Contains the errors raised while evaluating a tree: division by zero and
/// results that do not fit in an `i64`.
pub mod arithmetic_error;

pub use arithmetic_error::ArithmeticError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of the scan, parse and evaluate pipeline.
pub enum Error {
    /// The input could not be scanned or parsed.
    Parse(ParseError),
    /// The tree could not be evaluated.
    Arithmetic(ArithmeticError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<ArithmeticError> for Error {
    fn from(error: ArithmeticError) -> Self {
        Self::Arithmetic(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Arithmetic(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}
