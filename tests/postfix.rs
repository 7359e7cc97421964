use pretty_assertions::assert_eq;
use yardcalc::{
    error::ParseError,
    interpreter::{
        converter::{precedence, render, to_postfix},
        lexer::{Token, tokenize},
    },
};

fn postfix(src: &str) -> String {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to lex: {e}"));
    render(&to_postfix(&tokens).unwrap_or_else(|e| panic!("'{src}' failed to convert: {e}")))
}

#[test]
fn precedence_table() {
    assert_eq!(precedence(&Token::Call), Some(-1));
    assert_eq!(precedence(&Token::Equals), Some(0));
    assert_eq!(precedence(&Token::Plus), Some(1));
    assert_eq!(precedence(&Token::Minus), Some(1));
    assert_eq!(precedence(&Token::Star), Some(2));
    assert_eq!(precedence(&Token::Slash), Some(2));
    assert_eq!(precedence(&Token::Percent), Some(2));
    assert_eq!(precedence(&Token::LParen), None);
    assert_eq!(precedence(&Token::Integer(1)), None);
}

#[test]
fn operands_keep_their_order() {
    assert_eq!(postfix("1 + 2"), "1 2 +");
    assert_eq!(postfix("A"), "A");
}

#[test]
fn higher_precedence_binds_tighter() {
    assert_eq!(postfix("1 + 2 * 3"), "1 2 3 * +");
    assert_eq!(postfix("1 * 2 + 3"), "1 2 * 3 +");
    assert_eq!(postfix("2 * ( 1 + 4 / 2 )"), "2 1 4 2 / + *");
}

#[test]
fn same_precedence_is_left_associative() {
    assert_eq!(postfix("8 - 4 - 2"), "8 4 - 2 -");
    assert_eq!(postfix("8 / 4 * 2 % 3"), "8 4 / 2 * 3 %");
}

#[test]
fn assignment_is_lowest_arithmetic_precedence() {
    assert_eq!(postfix("B = A + 2"), "B A 2 + =");
}

#[test]
fn chained_assignment_is_left_associative() {
    assert_eq!(postfix("A = B = 3"), "A B = 3 =");
}

#[test]
fn call_binds_loosest() {
    assert_eq!(postfix("S <- 5"), "S 5 <-");
    assert_eq!(postfix("S <- 2 + 3"), "S 2 3 + <-");
    assert_eq!(postfix("A = S <- 5"), "A S = 5 <-");
    assert_eq!(postfix("(S <- 2) * 3"), "S 2 <- 3 *");
}

#[test]
fn misparsed_unary_minus_shape() {
    assert_eq!(postfix("3 * -2"), "3 * 2 -");
}

#[test]
fn parentheses_must_balance() {
    let unclosed = tokenize("(1 + 2").unwrap();
    assert_eq!(to_postfix(&unclosed).unwrap_err(),
               ParseError::UnbalancedParenthesis { column: 0 });

    let unopened = tokenize("1 + 2)").unwrap();
    assert_eq!(to_postfix(&unopened).unwrap_err(),
               ParseError::UnbalancedParenthesis { column: 5 });
}

#[test]
fn definition_tokens_have_no_precedence() {
    let tokens = vec![(Token::Integer(1), 0), (Token::Comma, 1), (Token::Integer(2), 2)];
    assert_eq!(to_postfix(&tokens).unwrap_err(),
               ParseError::UnexpectedToken { token:  ",".to_string(),
                                             column: 1, });
}
