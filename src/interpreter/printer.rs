use std::fmt::{self, Write};

use crate::ast::Expr;

/// Renders a tree in infix notation.
///
/// Literals are written as decimal digits and binary nodes as left operand,
/// operator symbol, right operand, with no spaces. Parentheses are never
/// written, so the rendering of `(2+3)*4` is `2+3*4`; re-parsing a rendering
/// reproduces the tree only when the source had no grouping that changed the
/// shape.
///
/// # Example
/// ```
/// use intcalc::{interpreter::printer::render, parse};
///
/// assert_eq!(render(&parse("1 + 2 * 3").unwrap()), "1+2*3");
/// assert_eq!(render(&parse("(1 + 2) * 3").unwrap()), "1+2*3");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

fn write_infix<W: Write>(out: &mut W, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Literal { value } => write!(out, "{value}"),
        Expr::BinaryOp { left, op, right } => {
            write_infix(out, left)?;
            write!(out, "{op}")?;
            write_infix(out, right)
        },
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_infix(f, self)
    }
}
