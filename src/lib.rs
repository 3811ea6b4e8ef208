//! # intcalc
//!
//! intcalc is a one-line integer arithmetic interpreter written in Rust.
//! It scans, parses, and evaluates expressions built from non-negative
//! integer literals, the operators `+ - * /` and parentheses.
//!
//! The pipeline runs in one direction: text → tokens → tree → integer. Each
//! call owns its scanner and its tree, and no state survives between calls,
//! so independent inputs can be evaluated on separate threads.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::Error,
    interpreter::{
        lexer::Scanner,
        parser::core::{ParseResult, Parser},
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as an owned binary tree. The tree is built by the
/// parser and traversed by the evaluator and the printer.
pub mod ast;
/// Settings for a run of the pipeline.
///
/// Holds the input size guard that replaces the fixed line buffer of a
/// console calculator, and the nesting depth bound.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing,
/// or evaluating an input line, and the `Error` type that wraps them for the
/// whole pipeline.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Names the expected and found token kinds for syntax errors.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the scan, parse and evaluate pipeline.
///
/// This module ties together the scanner, the parser, the evaluator and the
/// printer.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::interpreter::{evaluator::core::evaluate, printer::render};

/// Parses an input line into an expression tree.
///
/// Uses the default [`Config`], which rejects lines longer than
/// [`config::DEFAULT_MAX_INPUT_LEN`] bytes.
///
/// # Errors
/// Returns a `ParseError` if the input is too long, nests deeper than
/// [`config::DEFAULT_MAX_DEPTH`], contains an integer literal that does not
/// fit in an `i64`, or is not a single well-formed expression.
///
/// # Examples
/// ```
/// use intcalc::parse;
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(tree.to_string(), "2+3*4");
///
/// assert!(parse("(2+3").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<ast::Expr> {
    parse_with(source, &Config::default())
}

/// Parses an input line into an expression tree using `config`.
///
/// # Errors
/// Same as [`parse`], with the limits taken from `config.max_input_len` and
/// `config.max_depth`.
pub fn parse_with(source: &str, config: &Config) -> ParseResult<ast::Expr> {
    config.check_input_len(source)?;

    let expr = Parser::with_max_depth(Scanner::new(source), config.max_depth)?.parse()?;
    tracing::debug!(tree = %expr, depth = expr.depth(), "parsed expression");
    Ok(expr)
}

/// Returns the integer value of an input line.
///
/// This function scans, parses, and evaluates `source` with the default
/// [`Config`]. Any failure aborts the pipeline; no partial result is produced.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use intcalc::{
///     error::{ArithmeticError, Error},
///     get_result,
/// };
///
/// assert_eq!(get_result("(2 + 3) * 4").unwrap(), 20);
/// assert_eq!(get_result("5 / 0"),
///            Err(Error::Arithmetic(ArithmeticError::DivisionByZero)));
/// ```
pub fn get_result(source: &str) -> Result<i64, Error> {
    get_result_with(source, &Config::default())
}

/// Returns the integer value of an input line using `config`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn get_result_with(source: &str, config: &Config) -> Result<i64, Error> {
    let expr = parse_with(source, config)?;
    let value = evaluate(&expr)?;
    tracing::debug!(value, "evaluated expression");
    Ok(value)
}
