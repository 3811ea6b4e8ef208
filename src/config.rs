use crate::{
    error::ParseError,
    interpreter::{lexer::logical_line, parser::core::ParseResult},
};

/// Default input guard: a 100-byte line buffer minus its terminator.
pub const DEFAULT_MAX_INPUT_LEN: usize = 99;
/// Default bound on parenthesis nesting and on the depth of the parsed tree.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum length, in bytes, of the logical input line. Text after the
    /// first line break does not count. `None` disables the check.
    pub max_input_len: Option<usize>,
    /// Maximum parenthesis nesting and maximum tree depth. Parsing, evaluation
    /// and dropping a tree all recurse over it, so this bound always applies.
    pub max_depth:     usize,
}

impl Config {
    /// A configuration without an input size limit. The depth bound keeps its
    /// default.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_input_len: None,
               max_depth:     DEFAULT_MAX_DEPTH, }
    }

    /// Checks the logical line of `source` against `max_input_len`.
    ///
    /// # Example
    /// ```
    /// use intcalc::{config::Config, error::ParseError};
    ///
    /// let config = Config { max_input_len: Some(3),
    ///                       ..Config::default() };
    /// assert_eq!(config.check_input_len("1+2\nmore text"), Ok(()));
    /// assert_eq!(config.check_input_len("1+22"),
    ///            Err(ParseError::InputTooLong { len: 4, max: 3 }));
    /// ```
    pub fn check_input_len(&self, source: &str) -> ParseResult<()> {
        let len = logical_line(source).len();
        match self.max_input_len {
            Some(max) if len > max => Err(ParseError::InputTooLong { len, max }),
            _ => Ok(()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
               max_depth:     DEFAULT_MAX_DEPTH, }
    }
}
