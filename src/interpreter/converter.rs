use crate::{
    error::ParseError,
    interpreter::lexer::{ParseResult, Token},
};

/// Returns the binding strength of an operator token.
///
/// | operator          | precedence |
/// |-------------------|------------|
/// | `<-`              | -1         |
/// | `=`               | 0          |
/// | `+` `-`           | 1          |
/// | `*` `/` `%`       | 2          |
///
/// Every other token has no precedence and returns `None`.
#[must_use]
pub const fn precedence(token: &Token) -> Option<i8> {
    match token {
        Token::Call => Some(-1),
        Token::Equals => Some(0),
        Token::Plus | Token::Minus => Some(1),
        Token::Star | Token::Slash | Token::Percent => Some(2),
        _ => None,
    }
}

/// Looks up the precedence of an operator or reports it as unexpected.
fn require_precedence(token: &Token, column: usize) -> ParseResult<i8> {
    precedence(token).ok_or_else(|| ParseError::UnexpectedToken { token: token.to_string(),
                                                                  column })
}

/// Converts an infix token stream into postfix order.
///
/// This is the shunting-yard algorithm with an explicit operator stack.
/// Operands go straight to the output. An incoming operator first pops every
/// stacked operator whose precedence is greater than or equal to its own, so
/// all operators, `=` included, associate to the left: `A = B = 3` becomes
/// `A B = 3 =`.
///
/// # Errors
/// - `UnbalancedParenthesis` for a `)` without a `(` or a `(` never closed.
/// - `UnexpectedToken` for a token that is neither operand, parenthesis nor
///   operator.
///
/// # Examples
/// ```
/// use yardcalc::interpreter::{converter::to_postfix, lexer::tokenize};
///
/// let postfix = to_postfix(&tokenize("2 * ( 1 + 4 / 2 )").unwrap()).unwrap();
/// let text: Vec<String> = postfix.iter().map(|(t, _)| t.to_string()).collect();
/// assert_eq!(text.join(" "), "2 1 4 2 / + *");
/// ```
pub fn to_postfix(tokens: &[(Token, usize)]) -> ParseResult<Vec<(Token, usize)>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<(Token, usize)> = Vec::new();

    for &(token, column) in tokens {
        match token {
            Token::Integer(_) | Token::Identifier(_) => output.push((token, column)),
            Token::LParen => operators.push((token, column)),
            Token::RParen => loop {
                match operators.pop() {
                    Some((Token::LParen, _)) => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::UnbalancedParenthesis { column }),
                }
            },
            _ => {
                let current = require_precedence(&token, column)?;
                while let Some(&(top, top_column)) = operators.last() {
                    if top == Token::LParen || require_precedence(&top, top_column)? < current {
                        break;
                    }
                    output.push((top, top_column));
                    operators.pop();
                }
                operators.push((token, column));
            },
        }
    }

    while let Some((op, column)) = operators.pop() {
        if op == Token::LParen {
            return Err(ParseError::UnbalancedParenthesis { column });
        }
        output.push((op, column));
    }

    tracing::debug!(postfix = %render(&output), "converted to postfix");
    Ok(output)
}

/// Renders a token sequence as space separated text, e.g. `A B = 3 =`.
#[must_use]
pub fn render(tokens: &[(Token, usize)]) -> String {
    tokens.iter()
          .map(|(token, _)| token.to_string())
          .collect::<Vec<_>>()
          .join(" ")
}
