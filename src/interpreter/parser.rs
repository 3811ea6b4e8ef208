/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive (`+`, `-`)
/// and multiplicative (`*`, `/`).
pub mod binary;

/// Core parser state and entry points.
///
/// Contains the [`core::Parser`] type, token consumption and the check that no
/// tokens remain after a complete expression.
pub mod core;

/// Primary expression parsing.
///
/// Handles the operands of binary operators: integer literals and
/// parenthesized expressions.
pub mod primary;
