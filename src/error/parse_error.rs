use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or postfix conversion.
pub enum ParseError {
    /// Found a character (or definition-only token) that has no meaning in an
    /// expression.
    InvalidToken {
        /// The offending source text.
        token:  String,
        /// The byte column where the token starts.
        column: usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The byte column where the literal starts.
        column:  usize,
    },
    /// A `)` had no matching `(`, or a `(` was never closed.
    UnbalancedParenthesis {
        /// The byte column of the unmatched parenthesis.
        column: usize,
    },
    /// A token could not take part in the expression, for example an operator
    /// without a precedence.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The byte column where the token starts.
        column: usize,
    },
    /// The function definition syntax was invalid.
    InvalidFunctionDefinition {
        /// What was wrong with the definition.
        details: String,
        /// The byte column where the problem was found.
        column:  usize,
    },
}

impl ParseError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } | Self::LiteralTooLarge { .. } => ErrorKind::LexError,
            Self::UnbalancedParenthesis { .. }
            | Self::UnexpectedToken { .. }
            | Self::InvalidFunctionDefinition { .. } => ErrorKind::SyntaxError,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { token, column } => {
                write!(f, "Error at column {column}: Invalid token '{token}'.")
            },
            Self::LiteralTooLarge { literal, column } => {
                write!(f, "Error at column {column}: Literal {literal} is too large.")
            },
            Self::UnbalancedParenthesis { column } => {
                write!(f, "Error at column {column}: Unbalanced parenthesis.")
            },
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token '{token}'.")
            },
            Self::InvalidFunctionDefinition { details, column } => {
                write!(f, "Error at column {column}: Invalid function definition: {details}. Example: S[x] -> x * x")
            },
        }
    }
}

impl std::error::Error for ParseError {}
