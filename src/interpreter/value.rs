use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::lexer::Token};

/// An entry on the evaluator's operand stack.
///
/// Operands stay unresolved until an operator consumes them, which is what
/// lets `=` see the name on its left instead of that variable's old value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A literal or an already computed result.
    Number(i64),
    /// A reference to a variable, looked up when the value is needed.
    Variable(char),
}

impl Value {
    /// Builds an operand from a literal or identifier token.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Integer(n) => Some(Self::Number(*n)),
            Token::Identifier(c) => Some(Self::Variable(*c)),
            _ => None,
        }
    }

    /// Resolves the operand to an integer.
    ///
    /// # Errors
    /// `UndefinedVariable` if a referenced variable has no binding.
    pub fn resolve(self, variables: &HashMap<char, i64>, column: usize) -> Result<i64, RuntimeError> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Variable(name) => {
                variables.get(&name)
                         .copied()
                         .ok_or(RuntimeError::UndefinedVariable { name, column })
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Variable(c) => write!(f, "{c}"),
        }
    }
}
