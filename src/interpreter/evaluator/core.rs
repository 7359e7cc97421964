use std::collections::HashMap;

use crate::{
    error::{EvalError, RuntimeError},
    interpreter::{
        converter::to_postfix,
        definition::{FunctionDef, parse_definition},
        evaluator::arithmetic,
        lexer::{Token, tokenize},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure. Function bodies are compiled lazily,
/// so a parse error can surface during evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// An operand together with the column it came from.
pub(crate) type Operand = (Value, usize);

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: variable bindings and user
/// defined functions. The two live in separate namespaces, so `S = 3` and
/// `S[x] -> x` can coexist.
///
/// ## Usage
///
/// `Context` is created once by whatever hosts the calculator (REPL, script
/// runner, test) and passed to every evaluation. Dropping it or calling
/// [`Context::reset`] forgets everything.
#[derive(Debug, Default, Clone)]
pub struct Context {
    /// Variable bindings, e.g. `A = 2` stores `'A' -> 2`.
    pub(crate) variables: HashMap<char, i64>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated by lines like `S[x] -> x * x`.
    pub(crate) functions: HashMap<char, FunctionDef>,
}

impl Context {
    /// Creates a new evaluation context with no variables and no functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one line of input.
    ///
    /// This is the main entry point. A line of the form `S[x] -> body` defines
    /// (or replaces) a function and yields `None`; its body is only checked
    /// when the function is called. Anything else is tokenized, converted to
    /// postfix and evaluated, yielding the integer result.
    ///
    /// Errors leave the context as it was, except for assignments that already
    /// ran to the left of the failure point.
    ///
    /// # Errors
    /// Any [`ParseError`](crate::error::ParseError) or
    /// [`RuntimeError`] raised along the way.
    ///
    /// # Examples
    /// ```
    /// use yardcalc::Context;
    ///
    /// let mut context = Context::new();
    /// assert_eq!(context.evaluate("A = 2").unwrap(), Some(2));
    /// assert_eq!(context.evaluate("B = A + 2").unwrap(), Some(4));
    /// assert_eq!(context.evaluate("S[x] -> x * x").unwrap(), None);
    /// assert_eq!(context.evaluate("S <- B").unwrap(), Some(16));
    /// assert!(context.evaluate("1 / 0").is_err());
    /// ```
    pub fn evaluate(&mut self, line: &str) -> EvalResult<Option<i64>> {
        if let Some(def) = parse_definition(line)? {
            self.define_function(def);
            return Ok(None);
        }

        let postfix = to_postfix(&tokenize(line)?)?;
        self.eval_postfix(&postfix).map(Some)
    }

    /// Runs a postfix token sequence on the operand stack.
    ///
    /// Operands are pushed unresolved. Binary operators pop the right operand
    /// and then the left, resolve both and push the result. `=` and `<-`
    /// receive their operands unresolved.
    ///
    /// # Errors
    /// - `MalformedExpression` if an operator lacks operands or the stack does
    ///   not end with exactly one value.
    /// - Any error raised by an operator.
    pub fn eval_postfix(&mut self, postfix: &[(Token, usize)]) -> EvalResult<i64> {
        let mut stack: Vec<Operand> = Vec::new();

        for &(token, column) in postfix {
            if let Some(value) = Value::from_token(&token) {
                stack.push((value, column));
                continue;
            }

            let (right, left) = pop_operands(&mut stack, token, column)?;
            let result = match token {
                Token::Equals => self.eval_assignment(left, right, column)?,
                Token::Call => self.call_function(left, right, column)?,
                _ => {
                    let a = left.0.resolve(&self.variables, left.1)?;
                    let b = right.0.resolve(&self.variables, right.1)?;
                    arithmetic::apply(token, a, b, column)?
                },
            };
            stack.push((Value::Number(result), column));
        }

        match stack.as_slice() {
            [(value, column)] => Ok(value.resolve(&self.variables, *column)?),
            [] => Err(RuntimeError::MalformedExpression { details: "empty expression".to_string(),
                                                          column:  0, }.into()),
            [.., (_, column)] => {
                Err(RuntimeError::MalformedExpression { details: format!("{} values left without an operator",
                                                                         stack.len()),
                                                        column:  *column, }.into())
            },
        }
    }

    /// Evaluates `target = value`.
    ///
    /// The target must still be an unresolved variable. The value is resolved,
    /// stored, and returned so that the assignment itself is an expression.
    ///
    /// # Errors
    /// - `InvalidAssignment` if the target is a number.
    /// - `UndefinedVariable` if the value names an unbound variable.
    fn eval_assignment(&mut self, target: Operand, value: Operand, column: usize) -> EvalResult<i64> {
        let Value::Variable(name) = target.0 else {
            return Err(RuntimeError::InvalidAssignment { target: target.0.to_string(),
                                                         column }.into());
        };

        let value = value.0.resolve(&self.variables, value.1)?;
        tracing::debug!(%name, value, "assign");
        self.variables.insert(name, value);
        Ok(value)
    }

    /// Stores a function definition, replacing any previous one of that name.
    pub fn define_function(&mut self, def: FunctionDef) {
        tracing::debug!(name = %def.name, replaced = self.functions.contains_key(&def.name),
                        "define function");
        self.functions.insert(def.name, def);
    }

    /// Forgets every variable and function.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.functions.clear();
    }

    /// Returns the value bound to a variable, if any.
    #[must_use]
    pub fn variable(&self, name: char) -> Option<i64> {
        self.variables.get(&name).copied()
    }

    /// Returns the definition of a function, if any.
    #[must_use]
    pub fn function(&self, name: char) -> Option<&FunctionDef> {
        self.functions.get(&name)
    }

    /// Lists all variable bindings sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(char, i64)> {
        let mut variables: Vec<_> = self.variables.iter().map(|(k, v)| (*k, *v)).collect();
        variables.sort_unstable();
        variables
    }

    /// Lists all function definitions sorted by name.
    #[must_use]
    pub fn functions(&self) -> Vec<&FunctionDef> {
        let mut functions: Vec<_> = self.functions.values().collect();
        functions.sort_unstable_by_key(|def| def.name);
        functions
    }
}

/// Pops the right and then the left operand of a binary operator.
fn pop_operands(stack: &mut Vec<Operand>, op: Token, column: usize) -> EvalResult<(Operand, Operand)> {
    match (stack.pop(), stack.pop()) {
        (Some(right), Some(left)) => Ok((right, left)),
        _ => Err(RuntimeError::MalformedExpression { details: format!("'{op}' is missing an operand"),
                                                     column }.into()),
    }
}
