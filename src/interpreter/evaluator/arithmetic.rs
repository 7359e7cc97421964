use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token},
};

/// Applies a binary arithmetic operator to two resolved operands.
///
/// Division and remainder truncate toward zero, matching Rust's integer
/// `/` and `%`. Every operation is checked, so a result outside the `i64`
/// range is reported instead of wrapping.
///
/// # Parameters
/// - `op`: One of `Plus`, `Minus`, `Star`, `Slash` or `Percent`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `column`: Column of the operator, for error reporting.
///
/// # Errors
/// - `DivisionByZero` / `ModuloByZero` when `right` is zero.
/// - `Overflow` when the result does not fit, e.g. `i64::MIN / -1`.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{evaluator::arithmetic::apply, lexer::Token};
///
/// assert_eq!(apply(Token::Slash, -7, 2, 0).unwrap(), -3);
/// assert_eq!(apply(Token::Percent, -7, 2, 0).unwrap(), -1);
/// assert_eq!(apply(Token::Percent, i64::MIN, -1, 0).unwrap(), 0);
/// assert!(apply(Token::Slash, 1, 0, 0).is_err());
/// ```
pub fn apply(op: Token, left: i64, right: i64, column: usize) -> EvalResult<i64> {
    let result = match op {
        Token::Plus => left.checked_add(right),
        Token::Minus => left.checked_sub(right),
        Token::Star => left.checked_mul(right),
        Token::Slash => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { column }.into());
            }
            left.checked_div(right)
        },
        Token::Percent => {
            if right == 0 {
                return Err(RuntimeError::ModuloByZero { column }.into());
            }
            // Only the quotient of `i64::MIN / -1` overflows; its remainder is 0.
            Some(left.wrapping_rem(right))
        },
        other => {
            return Err(RuntimeError::MalformedExpression { details: format!("'{other}' is not an arithmetic operator"),
                                                           column }.into());
        },
    };

    result.ok_or_else(|| RuntimeError::Overflow { column }.into())
}
