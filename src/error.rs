/// Lexing and syntax errors.
///
/// Defines all error types that can occur while turning a line of text into a
/// postfix token sequence: unrecognised characters, literals that do not fit,
/// unbalanced parentheses and malformed function definitions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as unknown names, division by zero or a stack that does not
/// reduce to a single value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The coarse category of an [`EvalError`].
///
/// Hosts such as the REPL use this to decide how to present a failure without
/// matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An unrecognised character or an unrepresentable literal.
    LexError,
    /// Unbalanced parentheses or a malformed token sequence.
    SyntaxError,
    /// A variable was read before it was assigned.
    UndefinedVariable,
    /// `<-` named a function that was never defined.
    UndefinedFunction,
    /// The left side of `=` was not a variable.
    InvalidAssignment,
    /// A function was called with the wrong number of arguments.
    ArityMismatch,
    /// Integer division by zero.
    DivisionByZero,
    /// Integer remainder by zero.
    ModuloByZero,
    /// The operand stack did not reduce to exactly one value.
    MalformedExpression,
    /// An arithmetic result did not fit in an `i64`.
    Overflow,
}

/// Any failure produced by a single call to
/// [`Context::evaluate`](crate::interpreter::evaluator::core::Context::evaluate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The line could not be tokenized or converted to postfix.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
