use logos::Logos;

use crate::error::ParseError;

/// Result type shared by the lexing and conversion stages.
pub type ParseResult<T> = Result<T, ParseError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// A minus sign written directly in front of digits, such as `-7`.
    ///
    /// Only produced by [`lex`]; [`normalize`] turns it into either a
    /// negative [`Token::Integer`] or a [`Token::Minus`] followed by a
    /// positive literal.
    #[regex(r"-[0-9]+", parse_integer)]
    NegativeInteger(i64),
    /// A single-letter variable or function name. `ab` is two identifiers.
    #[regex(r"[a-zA-Z]", parse_identifier)]
    Identifier(char),
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
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `<-`, the function call operator.
    #[token("<-")]
    Call,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`, only valid in a function definition.
    #[token("[")]
    LBracket,
    /// `]`, only valid in a function definition.
    #[token("]")]
    RBracket,
    /// `,`, only valid in a function definition.
    #[token(",")]
    Comma,
    /// `->`, only valid in a function definition.
    #[token("->")]
    Arrow,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for tokens that may only appear in the head of a
    /// function definition.
    #[must_use]
    pub const fn is_definition_only(&self) -> bool {
        matches!(self, Self::LBracket | Self::RBracket | Self::Comma | Self::Arrow)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) | Self::NegativeInteger(n) => write!(f, "{n}"),
            Self::Identifier(c) => write!(f, "{c}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Equals => write!(f, "="),
            Self::Call => write!(f, "<-"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Arrow => write!(f, "->"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Returns the single character of an identifier token.
fn parse_identifier(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Splits a line into raw tokens paired with their byte column.
///
/// This is the context-free pass: every `-<digits>` run comes out as
/// [`Token::NegativeInteger`] and definition-only tokens are kept, so the
/// head of a function definition can be matched on it.
///
/// # Errors
/// - `InvalidToken` for any character the language does not define.
/// - `LiteralTooLarge` for an integer that does not fit in an `i64`.
pub fn lex(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            let slice = lexer.slice();
            let digits = slice.strip_prefix('-').unwrap_or(slice);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { literal: slice.to_string(),
                                                         column });
            }
            return Err(ParseError::InvalidToken { token: slice.to_string(),
                                                  column });
        }
    }

    Ok(tokens)
}

/// Turns raw tokens into the expression token stream.
///
/// A `-` directly in front of digits stays part of the literal only when it
/// starts the line or directly follows `(`. Everywhere else it becomes the
/// binary [`Token::Minus`] and the digits a positive literal, so `3 * -2`
/// yields `3 * - 2` and fails later as a malformed expression.
///
/// # Errors
/// `InvalidToken` if a definition-only token (`[`, `]`, `,`, `->`) appears.
pub fn normalize(raw: Vec<(Token, usize)>) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens: Vec<(Token, usize)> = Vec::with_capacity(raw.len());

    for (token, column) in raw {
        match token {
            Token::NegativeInteger(value) => {
                let folds = matches!(tokens.last(), None | Some((Token::LParen, _)));
                if folds {
                    tokens.push((Token::Integer(value), column));
                } else {
                    let magnitude =
                        value.checked_neg()
                             .ok_or_else(|| ParseError::LiteralTooLarge { literal: value.unsigned_abs()
                                                                                        .to_string(),
                                                                          column:  column + 1, })?;
                    tokens.push((Token::Minus, column));
                    tokens.push((Token::Integer(magnitude), column + 1));
                }
            },
            tok if tok.is_definition_only() => {
                return Err(ParseError::InvalidToken { token: tok.to_string(),
                                                      column });
            },
            tok => tokens.push((tok, column)),
        }
    }

    Ok(tokens)
}

/// Tokenizes a single expression line.
///
/// # Errors
/// Any error from [`lex`] or [`normalize`].
///
/// # Examples
/// ```
/// use yardcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(-2) - 3").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds,
///            vec![Token::LParen,
///                 Token::Integer(-2),
///                 Token::RParen,
///                 Token::Minus,
///                 Token::Integer(3)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let tokens = normalize(lex(source)?)?;
    tracing::trace!(count = tokens.len(), "tokenized line");
    Ok(tokens)
}
