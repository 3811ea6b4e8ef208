use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
///
/// Any character that does not start a token is skipped, including whitespace
/// and characters the language does not know about. `2 $ 3` therefore scans
/// exactly like `2 3`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[^0-9+\-*/()]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of the logical input line. Never produced by the generated lexer
    /// itself; [`Scanner`] emits it once the input is exhausted.
    EndOfInput,
}

impl Token {
    /// Returns the payload-free kind of this token.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::LParen.kind(), TokenKind::LParen);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// The kind of a [`Token`] without its payload.
///
/// Used wherever the parser needs to name a token it expected, and in syntax
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Integer => "integer",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{kind}")
    }
}

/// Errors raised by the generated lexer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character matched neither a token nor the skip rule. The skip rule
    /// covers every character outside the token set, so the scanner never
    /// sees this; if it did, it would skip the input like any other unknown
    /// character.
    #[default]
    UnrecognizedInput,
    /// A digit run does not fit in an `i64`.
    LiteralTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed value.
/// - `Err(LexError::LiteralTooLarge)`: If the digits do not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Returns the logical line: everything before the first line break or NUL.
pub(crate) fn logical_line(source: &str) -> &str {
    source.find(['\n', '\0'])
          .map_or(source, |end| &source[..end])
}

/// Turns raw text into tokens on demand.
///
/// The scanner owns the only mutable state of the pipeline: its cursor into
/// the input. Input ends at the first line break or NUL character; anything
/// after it is never looked at.
#[derive(Clone)]
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(logical_line(source)) }
    }

    /// Returns the byte offset of the cursor.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }

    /// Returns the next token and advances the cursor past it.
    ///
    /// Once the input is exhausted every call returns [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Returns [`ParseError::LiteralTooLarge`] if an integer literal does not
    /// fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Scanner, Token};
    ///
    /// let mut scanner = Scanner::new("12 * x(");
    /// assert_eq!(scanner.next_token().unwrap(), Token::Integer(12));
    /// assert_eq!(scanner.next_token().unwrap(), Token::Star);
    /// assert_eq!(scanner.next_token().unwrap(), Token::LParen);
    /// assert_eq!(scanner.next_token().unwrap(), Token::EndOfInput);
    /// assert_eq!(scanner.next_token().unwrap(), Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> ParseResult<Token> {
        loop {
            match self.lexer.next() {
                Some(Ok(token)) => {
                    tracing::trace!(?token, offset = self.offset(), "scanned token");
                    return Ok(token);
                },
                Some(Err(LexError::LiteralTooLarge)) => {
                    return Err(ParseError::LiteralTooLarge { offset: self.lexer.span().start });
                },
                // Skipped like any other unknown character.
                Some(Err(LexError::UnrecognizedInput)) => {},
                None => return Ok(Token::EndOfInput),
            }
        }
    }

    /// Returns the next token without moving the cursor.
    ///
    /// # Errors
    /// Same as [`Scanner::next_token`].
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Scanner, Token};
    ///
    /// let mut scanner = Scanner::new("(1");
    /// assert_eq!(scanner.peek_token().unwrap(), Token::LParen);
    /// assert_eq!(scanner.offset(), 0);
    /// assert_eq!(scanner.next_token().unwrap(), Token::LParen);
    /// ```
    pub fn peek_token(&self) -> ParseResult<Token> {
        self.clone().next_token()
    }

    /// Scans the next token and checks that it has the expected kind.
    ///
    /// # Errors
    /// Returns [`ParseError::Syntax`] when the scanned token is of another
    /// kind, or any error [`Scanner::next_token`] can return.
    pub fn eat_token(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let token = self.next_token()?;
        if token.kind() == kind {
            Ok(token)
        } else {
            Err(ParseError::Syntax { expected: Some(kind),
                                     found:    token.kind(), })
        }
    }

    /// Scans a whole input, returning every token up to and including
    /// [`Token::EndOfInput`].
    ///
    /// # Errors
    /// Same as [`Scanner::next_token`].
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Scanner, Token};
    ///
    /// let tokens = Scanner::tokenize("1+2").unwrap();
    /// assert_eq!(tokens,
    ///            vec![Token::Integer(1), Token::Plus, Token::Integer(2), Token::EndOfInput]);
    /// ```
    #[allow(clippy::use_self)]
    pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token()?;
            tokens.push(token);
            if token == Token::EndOfInput {
                return Ok(tokens);
            }
        }
    }
}
