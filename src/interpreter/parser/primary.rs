use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser, Subtree},
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions are the operands of the binary operators:
    /// - integer literals
    /// - parenthesized expressions
    ///
    /// Grammar:
    /// ```text
    ///     primary := INTEGER
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// `Syntax` with no expected kind if the current token can start neither
    /// form, e.g. the `)` in `)2+3(` or the end of input in `2+`.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Subtree> {
        match *self.current() {
            Token::Integer(_) => self.parse_literal(),
            Token::LParen => self.parse_grouping(),
            other => Err(ParseError::Syntax { expected: None,
                                              found:    other.kind(), }),
        }
    }

    /// Parses an integer literal into a leaf node.
    fn parse_literal(&mut self) -> ParseResult<Subtree> {
        match self.eat(TokenKind::Integer)? {
            Token::Integer(value) => Ok((Expr::literal(value), 1)),
            other => Err(ParseError::Syntax { expected: Some(TokenKind::Integer),
                                              found:    other.kind(), }),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    ///
    /// The parentheses only shape the tree; no node is created for them.
    ///
    /// # Errors
    /// - `Syntax` expecting `)` if the group is not closed, as in `(2+3`.
    /// - `TooDeep` if the group would exceed the nesting bound.
    fn parse_grouping(&mut self) -> ParseResult<Subtree> {
        self.enter_group()?;
        self.eat(TokenKind::LParen)?;
        let inner = self.parse_additive()?;
        self.eat(TokenKind::RParen)?;
        self.leave_group();
        Ok(inner)
    }
}
