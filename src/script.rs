use crate::{error::EvalError, interpreter::evaluator::core::Context};

/// A failure while running a script, tagged with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// The line on which evaluation failed.
    pub line:  usize,
    /// What went wrong on that line.
    pub error: EvalError,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Evaluates a script one line at a time and returns the last result.
///
/// Blank lines and lines whose first non-blank character is `#` are skipped.
/// Function definitions take effect for the following lines but produce no
/// result. Evaluation stops at the first failing line.
///
/// # Errors
/// A [`ScriptError`] naming the failing line.
///
/// # Examples
/// ```
/// use yardcalc::{Context, run_script};
///
/// let mut context = Context::new();
/// let source = "# squares\nS[x] -> x * x\nA = 3\nS <- A\n";
/// assert_eq!(run_script(source, &mut context).unwrap(), Some(9));
///
/// let err = run_script("A\nB", &mut context).unwrap_err();
/// assert_eq!(err.line, 2);
/// ```
pub fn run_script(source: &str, context: &mut Context) -> Result<Option<i64>, ScriptError> {
    let mut result = None;

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match context.evaluate(line) {
            Ok(Some(value)) => result = Some(value),
            Ok(None) => {},
            Err(error) => {
                return Err(ScriptError { line: index + 1,
                                         error });
            },
        }
    }

    Ok(result)
}
