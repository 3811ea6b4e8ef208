use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// The parser found a token it cannot accept at this point.
    Syntax {
        /// The token kind the parser required, if a single one was required.
        expected: Option<TokenKind>,
        /// The token kind actually found.
        found:    TokenKind,
    },
    /// An integer literal was too large to be represented as an `i64`.
    LiteralTooLarge {
        /// Byte offset of the literal in the input.
        offset: usize,
    },
    /// Parentheses nest, or operators chain, deeper than the configured bound.
    TooDeep {
        /// The configured maximum depth.
        max: usize,
    },
    /// The input line exceeds the configured maximum length.
    InputTooLong {
        /// Length of the input line in bytes.
        len: usize,
        /// The configured maximum.
        max: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax { expected: Some(expected),
                           found, } => {
                write!(f, "Invalid syntax: expected {expected}, found {found}.")
            },
            Self::Syntax { expected: None,
                           found, } => write!(f, "Invalid syntax: unexpected {found}."),
            Self::LiteralTooLarge { offset } => {
                write!(f, "Literal at offset {offset} is too large.")
            },
            Self::TooDeep { max } => {
                write!(f, "Expression nests deeper than the limit of {max}.")
            },
            Self::InputTooLong { len, max } => write!(f,
                                                      "Input is {len} bytes long, but at most {max} bytes are allowed."),
        }
    }
}

impl std::error::Error for ParseError {}
