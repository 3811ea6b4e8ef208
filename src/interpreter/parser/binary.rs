use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Subtree},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `10-2-3`
    /// becomes `(10-2)-3`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression, with its
    /// depth.
    pub(crate) fn parse_additive(&mut self) -> ParseResult<Subtree> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.eat(self.current().kind())?;
            let right = self.parse_multiplicative()?;
            left = self.fold(left, op, right)?;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`. Operands are primaries,
    /// so these operators bind tighter than `+` and `-` and end up deeper in
    /// the tree.
    ///
    /// The rule is: `multiplicative := primary (("*" | "/") primary)*`
    ///
    /// # Returns
    /// A binary expression tree combining primary nodes, with its depth.
    pub(crate) fn parse_multiplicative(&mut self) -> ParseResult<Subtree> {
        let mut left = self.parse_primary()?;
        while let Some(op) = token_to_binary_operator(self.current())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            self.eat(self.current().kind())?;
            let right = self.parse_primary()?;
            left = self.fold(left, op, right)?;
        }
        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+`, `-`, `*` or
/// `/`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use intcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
