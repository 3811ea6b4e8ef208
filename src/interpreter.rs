/// The evaluator module computes the integer value of a tree.
///
/// The evaluator traverses the AST depth-first, post-order, and applies the
/// four arithmetic operators with checked `i64` arithmetic.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Reports division by zero and overflow as errors instead of trapping.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The scanner reads the raw input line and produces tokens on demand: integer
/// literals, the four operators and parentheses. Every other character is
/// skipped. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Offers one-token lookahead without side effects.
/// - Reports integer literals that do not fit in an `i64`.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level. It folds operators of equal precedence to the left.
///
/// # Responsibilities
/// - Converts tokens into an owned expression tree.
/// - Rejects malformed input, including tokens left over after a complete
///   expression.
pub mod parser;
/// The printer module renders a tree back into infix text.
pub mod printer;
