use crate::{
    ast::{BinaryOperator, Expr},
    config::DEFAULT_MAX_DEPTH,
    error::ParseError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its depth.
pub(crate) type Subtree = (Expr, usize);

/// A recursive-descent parser over a [`Scanner`].
///
/// The parser keeps exactly one token of lookahead, the current token, which
/// is fetched from the scanner when the parser is created and replaced every
/// time a token is eaten.
///
/// Parenthesis nesting and tree depth are both bounded by `max_depth`, so a
/// tree the parser returns can be walked recursively without exhausting the
/// stack.
///
/// Grammar:
/// ```text
///     expression := term ( ("+" | "-") term )*
///     term       := factor ( ("*" | "/") factor )*
///     factor     := INTEGER | "(" expression ")"
/// ```
pub struct Parser<'src> {
    scanner:   Scanner<'src>,
    current:   Token,
    max_depth: usize,
    nesting:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the default depth bound and reads its first
    /// token.
    ///
    /// # Errors
    /// Returns an error if the first token cannot be scanned.
    pub fn new(scanner: Scanner<'src>) -> ParseResult<Self> {
        Self::with_max_depth(scanner, DEFAULT_MAX_DEPTH)
    }

    /// Creates a parser that rejects nesting or trees deeper than
    /// `max_depth`, and reads its first token.
    ///
    /// # Errors
    /// Returns an error if the first token cannot be scanned.
    pub fn with_max_depth(mut scanner: Scanner<'src>, max_depth: usize) -> ParseResult<Self> {
        let current = scanner.next_token()?;
        Ok(Self { scanner,
                  current,
                  max_depth,
                  nesting: 0 })
    }

    /// Returns the token the parser is looking at.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// On success the consumed token is returned and the next token becomes
    /// current.
    ///
    /// # Errors
    /// - `Syntax` naming the expected and the actual kind on a mismatch.
    /// - Propagates scanner errors for the following token.
    pub fn eat(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.current.kind() != kind {
            return Err(ParseError::Syntax { expected: Some(kind),
                                           found:    self.current.kind(), });
        }
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and recursively descends through the
    /// precedence hierarchy. Tokens after the expression are left in place;
    /// use [`Parser::parse`] to reject them.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive().map(|(expr, _)| expr)
    }

    /// Combines two subtrees under `op`, rejecting the result if it would be
    /// deeper than `max_depth`.
    pub(crate) fn fold(&self,
                       (left, left_depth): Subtree,
                       op: BinaryOperator,
                       (right, right_depth): Subtree)
                       -> ParseResult<Subtree> {
        let depth = 1 + left_depth.max(right_depth);
        if depth > self.max_depth {
            return Err(ParseError::TooDeep { max: self.max_depth });
        }
        Ok((Expr::binary(left, op, right), depth))
    }

    /// Enters one level of parenthesis nesting.
    pub(crate) fn enter_group(&mut self) -> ParseResult<()> {
        if self.nesting >= self.max_depth {
            return Err(ParseError::TooDeep { max: self.max_depth });
        }
        self.nesting += 1;
        Ok(())
    }

    /// Leaves one level of parenthesis nesting.
    pub(crate) const fn leave_group(&mut self) {
        self.nesting -= 1;
    }

    /// Parses a complete input line.
    ///
    /// Parses one expression and then requires the current token to be
    /// [`Token::EndOfInput`], so `1 2` or `(1))` are rejected instead of
    /// silently evaluating a prefix.
    ///
    /// # Errors
    /// - `Syntax` with `expected: Some(EndOfInput)` for trailing tokens.
    /// - `TooDeep` if nesting or tree depth exceeds the bound.
    /// - Propagates any errors from expression parsing.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{lexer::Scanner, parser::core::Parser};
    ///
    /// let tree = Parser::new(Scanner::new("1+2*3")).unwrap().parse().unwrap();
    /// assert_eq!(tree.to_string(), "1+2*3");
    ///
    /// assert!(Parser::new(Scanner::new("1 2")).unwrap().parse().is_err());
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        self.eat(TokenKind::EndOfInput)?;
        Ok(expr)
    }
}
