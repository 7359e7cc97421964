use std::{cell::OnceCell, rc::Rc};

use crate::{
    error::ParseError,
    interpreter::{
        converter::to_postfix,
        lexer::{ParseResult, Token, lex, tokenize},
    },
};

/// A user-defined function such as `S[x] -> x * x`.
///
/// The body is kept as source text. Its postfix form is compiled on the first
/// call and cached until the definition is replaced.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// The single-letter function name.
    pub name:   char,
    /// Parameter names in declaration order.
    pub params: Vec<char>,
    /// The body expression exactly as written after `->`, trimmed.
    pub body:   String,
    compiled:   OnceCell<Rc<[(Token, usize)]>>,
}

impl FunctionDef {
    /// Creates a definition from its parts.
    #[must_use]
    pub fn new(name: char, params: Vec<char>, body: impl Into<String>) -> Self {
        Self { name,
               params,
               body: body.into(),
               compiled: OnceCell::new() }
    }

    /// Returns the body in postfix order, compiling it on first use.
    ///
    /// # Errors
    /// Any lexing or conversion error in the body text.
    pub fn postfix(&self) -> ParseResult<Rc<[(Token, usize)]>> {
        if let Some(postfix) = self.compiled.get() {
            return Ok(Rc::clone(postfix));
        }
        let postfix: Rc<[(Token, usize)]> = to_postfix(&tokenize(&self.body)?)?.into();
        Ok(Rc::clone(self.compiled.get_or_init(|| postfix)))
    }
}

impl std::fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.params
                         .iter()
                         .map(char::to_string)
                         .collect::<Vec<_>>()
                         .join(", ");
        write!(f, "{}[{params}] -> {}", self.name, self.body)
    }
}

/// Recognises a function definition line.
///
/// A line is a definition only when it has the full form
///
/// ```text
///     <letter> [ <letter> (, <letter>)* ] -> <expression>
/// ```
///
/// with a possibly empty parameter list and a non-empty body. Only the head
/// before the first `->` is lexed; the body is stored as text and tokenized
/// when the function is first called. A line that does not have this shape is
/// not a definition and goes through ordinary tokenization, where `[` is
/// rejected as an invalid token.
///
/// Arity is not checked here; a call through `<-` always supplies exactly one
/// argument and fails if the definition disagrees.
///
/// # Returns
/// - `Ok(Some(def))` if the line is a definition.
/// - `Ok(None)` if the line is not a definition at all.
///
/// # Errors
/// `InvalidFunctionDefinition` if a parameter name is repeated.
///
/// # Examples
/// ```
/// use yardcalc::interpreter::definition::parse_definition;
///
/// let def = parse_definition("S[x] -> x * x").unwrap().unwrap();
/// assert_eq!(def.name, 'S');
/// assert_eq!(def.params, vec!['x']);
/// assert_eq!(def.body, "x * x");
///
/// assert!(parse_definition("x * x").unwrap().is_none());
/// assert!(parse_definition("S[x y] -> x").unwrap().is_none());
/// ```
pub fn parse_definition(line: &str) -> ParseResult<Option<FunctionDef>> {
    let Some((head, body)) = line.split_once("->") else {
        return Ok(None);
    };
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let Ok(tokens) = lex(head) else {
        return Ok(None);
    };
    let [(Token::Identifier(name), _), (Token::LBracket, _), list @ .., (Token::RBracket, _)] = tokens.as_slice()
    else {
        return Ok(None);
    };
    let Some(named) = parse_params(list) else {
        return Ok(None);
    };

    let mut params = Vec::with_capacity(named.len());
    for (param, column) in named {
        if params.contains(&param) {
            return Err(ParseError::InvalidFunctionDefinition { details: format!("duplicate parameter '{param}'"),
                                                               column });
        }
        params.push(param);
    }

    tracing::debug!(%name, ?params, body, "parsed function definition");
    Ok(Some(FunctionDef::new(*name, params, body)))
}

/// Reads a comma separated list of single-letter names.
///
/// Returns `None` unless names and commas strictly alternate, starting and
/// ending with a name. An empty list is valid.
fn parse_params(tokens: &[(Token, usize)]) -> Option<Vec<(char, usize)>> {
    let mut params = Vec::new();
    let mut expect_name = true;

    for &(token, column) in tokens {
        match (token, expect_name) {
            (Token::Identifier(param), true) => params.push((param, column)),
            (Token::Comma, false) => {},
            _ => return None,
        }
        expect_name = !expect_name;
    }

    (params.is_empty() || !expect_name).then_some(params)
}
