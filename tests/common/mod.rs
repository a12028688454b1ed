#![allow(dead_code)]

use lexcalc::{EvalError, Token, TokenKind, Value, evaluate, tokenize};

/// Tokenize `input`, strip `END_OF_INPUT`, and evaluate.
pub fn eval(input: &str) -> Result<Value, EvalError> {
    let tokens = tokenize(input);
    assert_eq!(
        tokens.last().map(|t| t.kind),
        Some(TokenKind::EndOfInput),
        "token stream must end with END_OF_INPUT"
    );
    evaluate(&tokens[..tokens.len() - 1])
}

/// Evaluate and panic with the error message on failure.
pub fn eval_ok(input: &str) -> Value {
    eval(input).unwrap_or_else(|e| panic!("failed to evaluate {input:?}: {e}"))
}

/// Kinds of every token, `END_OF_INPUT` included.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).iter().map(|t| t.kind).collect()
}

/// Texts of every token except `END_OF_INPUT`.
pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::EndOfInput)
        .map(|t| t.text.as_str())
        .collect()
}
