use pretty_assertions::assert_eq;
use yardcalc::{
    error::ParseError,
    interpreter::lexer::{Token, lex, tokenize},
};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
                 .into_iter()
                 .map(|(t, _)| t)
                 .collect()
}

#[test]
fn numbers_accumulate_digits() {
    assert_eq!(kinds("12345"), vec![Token::Integer(12345)]);
    assert_eq!(kinds("12 345"), vec![Token::Integer(12), Token::Integer(345)]);
}

#[test]
fn operators_and_parentheses() {
    assert_eq!(kinds("(1+2)*3/4%5=A"),
               vec![Token::LParen,
                    Token::Integer(1),
                    Token::Plus,
                    Token::Integer(2),
                    Token::RParen,
                    Token::Star,
                    Token::Integer(3),
                    Token::Slash,
                    Token::Integer(4),
                    Token::Percent,
                    Token::Integer(5),
                    Token::Equals,
                    Token::Identifier('A')]);
}

#[test]
fn call_operator_is_one_token() {
    assert_eq!(kinds("S<-5"),
               vec![Token::Identifier('S'), Token::Call, Token::Integer(5)]);
    assert_eq!(kinds("S <- -5"),
               vec![Token::Identifier('S'), Token::Call, Token::Minus, Token::Integer(5)]);
}

#[test]
fn minus_folds_at_start_of_line() {
    assert_eq!(kinds("-12"), vec![Token::Integer(-12)]);
    assert_eq!(kinds("  -12 + 1"),
               vec![Token::Integer(-12), Token::Plus, Token::Integer(1)]);
}

#[test]
fn minus_folds_after_left_paren() {
    assert_eq!(kinds("(-3)"),
               vec![Token::LParen, Token::Integer(-3), Token::RParen]);
    assert_eq!(kinds("( -3)"),
               vec![Token::LParen, Token::Integer(-3), Token::RParen]);
}

#[test]
fn minus_elsewhere_is_binary() {
    assert_eq!(kinds("4-3"),
               vec![Token::Integer(4), Token::Minus, Token::Integer(3)]);
    assert_eq!(kinds("3 * -2"),
               vec![Token::Integer(3), Token::Star, Token::Minus, Token::Integer(2)]);
    assert_eq!(kinds("A -1"),
               vec![Token::Identifier('A'), Token::Minus, Token::Integer(1)]);
}

#[test]
fn minus_before_non_digit_stays_operator() {
    assert_eq!(kinds("- 5"), vec![Token::Minus, Token::Integer(5)]);
    assert_eq!(kinds("-A"), vec![Token::Minus, Token::Identifier('A')]);
}

#[test]
fn letters_never_merge() {
    assert_eq!(kinds("abc"),
               vec![Token::Identifier('a'), Token::Identifier('b'), Token::Identifier('c')]);
}

#[test]
fn columns_are_byte_offsets() {
    let columns: Vec<usize> = tokenize("A = 10 - 2").unwrap()
                                                   .into_iter()
                                                   .map(|(_, c)| c)
                                                   .collect();
    assert_eq!(columns, vec![0, 2, 4, 7, 9]);

    let split: Vec<(Token, usize)> = tokenize("7-2").unwrap();
    assert_eq!(split,
               vec![(Token::Integer(7), 0), (Token::Minus, 1), (Token::Integer(2), 2)]);
}

#[test]
fn invalid_characters_are_rejected() {
    assert_eq!(tokenize("1 $ 2").unwrap_err(),
               ParseError::InvalidToken { token:  "$".to_string(),
                                          column: 2, });
    assert!(matches!(tokenize("1 < 2"), Err(ParseError::InvalidToken { .. })));
    assert!(matches!(tokenize("1.5"), Err(ParseError::InvalidToken { .. })));
}

#[test]
fn definition_tokens_are_rejected_in_expressions() {
    assert_eq!(tokenize("1, 2").unwrap_err(),
               ParseError::InvalidToken { token:  ",".to_string(),
                                          column: 1, });
    assert!(matches!(tokenize("A -> 2"), Err(ParseError::InvalidToken { .. })));
}

#[test]
fn raw_lex_keeps_definition_tokens() {
    let raw: Vec<Token> = lex("S[x, y] -> x").unwrap().into_iter().map(|(t, _)| t).collect();
    assert_eq!(raw,
               vec![Token::Identifier('S'),
                    Token::LBracket,
                    Token::Identifier('x'),
                    Token::Comma,
                    Token::Identifier('y'),
                    Token::RBracket,
                    Token::Arrow,
                    Token::Identifier('x')]);
}

#[test]
fn oversized_literals_are_rejected() {
    assert_eq!(tokenize("1 + 9223372036854775808").unwrap_err(),
               ParseError::LiteralTooLarge { literal: "9223372036854775808".to_string(),
                                             column:  4, });
    assert_eq!(kinds("-9223372036854775808"), vec![Token::Integer(i64::MIN)]);
    assert!(matches!(tokenize("1 -9223372036854775808"),
                     Err(ParseError::LiteralTooLarge { .. })));
}
