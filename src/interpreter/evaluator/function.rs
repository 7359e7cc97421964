use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Operand},
        value::Value,
    },
};

/// Number of arguments a `<-` call always supplies.
const CALL_ARGUMENTS: usize = 1;

impl Context {
    /// Evaluates `name <- argument`.
    ///
    /// The whole variable map is saved, the parameter is bound to the
    /// argument, and the body is evaluated in that environment. Afterwards the
    /// saved map is put back, whether or not the body succeeded, so callers
    /// never observe assignments made inside a call.
    ///
    /// There is no depth limit: a body that calls itself recurses until the
    /// process runs out of stack.
    ///
    /// # Errors
    /// - `MalformedExpression` if the callee is a number.
    /// - `UndefinedFunction` if no function of that name exists.
    /// - `ArityMismatch` if the definition does not take exactly one
    ///   parameter.
    /// - Any error from resolving the argument or evaluating the body.
    pub(crate) fn call_function(&mut self,
                                callee: Operand,
                                argument: Operand,
                                column: usize)
                                -> EvalResult<i64> {
        let Value::Variable(name) = callee.0 else {
            return Err(RuntimeError::MalformedExpression { details: format!("cannot call the number {}",
                                                                            callee.0),
                                                           column:  callee.1, }.into());
        };

        let func = self.functions
                       .get(&name)
                       .ok_or(RuntimeError::UndefinedFunction { name,
                                                                column: callee.1 })?;

        let &[param] = func.params.as_slice() else {
            return Err(RuntimeError::ArityMismatch { name,
                                                     expected: func.params.len(),
                                                     found: CALL_ARGUMENTS,
                                                     column }.into());
        };

        let body = func.postfix()?;
        let argument = argument.0.resolve(&self.variables, argument.1)?;

        tracing::debug!(%name, %param, argument, "call function");
        let saved = self.variables.clone();
        self.variables.insert(param, argument);
        let result = self.eval_postfix(&body);
        self.variables = saved;
        tracing::trace!(%name, ?result, "restored variables after call");

        result
    }
}
