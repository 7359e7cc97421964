use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    UndefinedVariable {
        /// The name of the variable.
        name:   char,
        /// The byte column where the variable appears.
        column: usize,
    },
    /// Called a function that has not been defined.
    UndefinedFunction {
        /// The name of the function.
        name:   char,
        /// The byte column of the function name.
        column: usize,
    },
    /// The left operand of `=` was not a variable.
    InvalidAssignment {
        /// The operand that was found instead.
        target: String,
        /// The byte column of the `=` operator.
        column: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     char,
        /// Number of parameters in the definition.
        expected: usize,
        /// Number of arguments supplied by the call.
        found:    usize,
        /// The byte column of the `<-` operator.
        column:   usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte column of the `/` operator.
        column: usize,
    },
    /// Attempted remainder by zero.
    ModuloByZero {
        /// The byte column of the `%` operator.
        column: usize,
    },
    /// The expression did not reduce to exactly one value.
    MalformedExpression {
        /// Details about what went wrong.
        details: String,
        /// The byte column where the problem was noticed.
        column:  usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The byte column of the operator.
        column: usize,
    },
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::UndefinedFunction { .. } => ErrorKind::UndefinedFunction,
            Self::InvalidAssignment { .. } => ErrorKind::InvalidAssignment,
            Self::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::ModuloByZero { .. } => ErrorKind::ModuloByZero,
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, column } => {
                write!(f, "Error at column {column}: Undefined variable '{name}'.")
            },
            Self::UndefinedFunction { name, column } => {
                write!(f, "Error at column {column}: Undefined function '{name}'.")
            },
            Self::InvalidAssignment { target, column } => {
                write!(f, "Error at column {column}: Cannot assign to '{target}', the left side of '=' must be a variable.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  column, } => {
                write!(f, "Error at column {column}: Function '{name}' takes {expected} argument(s) but {found} were supplied.")
            },
            Self::DivisionByZero { column } => write!(f, "Error at column {column}: Division by zero."),
            Self::ModuloByZero { column } => write!(f, "Error at column {column}: Modulo by zero."),
            Self::MalformedExpression { details, column } => {
                write!(f, "Error at column {column}: Malformed expression: {details}.")
            },
            Self::Overflow { column } => {
                write!(f, "Error at column {column}: Integer overflow while trying to compute result.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
