use std::fmt;

use crate::builtin::Builtin;
use crate::timing::{Timed, measure_fallible};
use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Token a syntax error was waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    LeftParen,
    Comma,
    RightParen,
    /// A number or function call.
    Expression,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftParen => write!(f, "'('"),
            Self::Comma => write!(f, "','"),
            Self::RightParen => write!(f, "')'"),
            Self::Expression => write!(f, "an expression"),
        }
    }
}

/// Classifies an evaluation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Right operand of `/` is zero.
    DivisionByZero,
    /// Right operand of `%` is zero.
    ModuloByZero,
    /// Tokens ran out where a number or function call was expected.
    UnexpectedEndOfInput,
    /// A required token is missing.
    SyntaxError {
        expected: Expected,
        found: Option<String>,
    },
    /// Identifier that is not a built-in function.
    UnknownIdentifier { name: String },
    /// Integer result does not fit in 64 bits, or a float power overflowed.
    Overflow,
    /// Argument outside the function's domain, e.g. `sqrt(-1)`.
    DomainError { function: &'static str },
    /// Function calls nested deeper than [`MAX_NESTING`].
    NestingTooDeep,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::UnexpectedEndOfInput => {
                write!(f, "unexpected end of expression")
            }
            Self::SyntaxError {
                expected,
                found: None,
            } => write!(f, "expected {expected}"),
            Self::SyntaxError {
                expected,
                found: Some(t),
            } => write!(f, "expected {expected}, got '{t}'"),
            Self::UnknownIdentifier { name } => {
                write!(f, "unknown identifier '{name}'")
            }
            Self::Overflow => write!(f, "numeric overflow"),
            Self::DomainError { function } => {
                write!(f, "math domain error in {function}")
            }
            Self::NestingTooDeep => {
                write!(f, "function calls nested deeper than {MAX_NESTING}")
            }
        }
    }
}

/// Error produced during evaluation.
///
/// `position` is the index of the offending token in the evaluated
/// slice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at position {position}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub position: usize,
}

/// Deepest function-call nesting `evaluate` accepts.
pub const MAX_NESTING: usize = 200;

/// Parse and evaluate an arithmetic expression in a single pass.
///
/// `tokens` must not include the trailing `END_OF_INPUT` token.
/// Tokens left over after a complete expression are ignored.
///
/// # Errors
///
/// Returns `EvalError` on division or modulo by zero, missing
/// parentheses or commas, unknown identifiers, integer overflow,
/// arguments outside a function's domain, and function calls nested
/// deeper than [`MAX_NESTING`].
pub fn evaluate(tokens: &[Token]) -> Result<Value, EvalError> {
    Evaluator::new(tokens).expression()
}

/// Evaluate and report how long evaluation took.
pub fn evaluate_timed(tokens: &[Token]) -> Result<Timed<Value>, EvalError> {
    measure_fallible(|| evaluate(tokens))
}

fn at(position: usize) -> impl FnOnce(EvalErrorKind) -> EvalError {
    move |kind| EvalError { kind, position }
}

struct Evaluator<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    /// Consume the next token if its kind is one of `kinds`.
    fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        let kind = self.peek_kind().filter(|k| kinds.contains(k))?;
        self.pos += 1;
        Some(kind)
    }

    fn expect(&mut self, kind: TokenKind, expected: Expected) -> Result<(), EvalError> {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            return Ok(());
        }
        Err(EvalError {
            kind: EvalErrorKind::SyntaxError {
                expected,
                found: self.tokens.get(self.pos).map(|t| t.text.clone()),
            },
            position: self.pos,
        })
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Value, EvalError> {
        let mut left = self.term()?;

        while let Some(op) = self.eat_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let op_pos = self.pos - 1;
            let right = self.term()?;
            left = match op {
                TokenKind::Plus => left.checked_add(right),
                _ => left.checked_sub(right),
            }
            .map_err(at(op_pos))?;
        }

        Ok(left)
    }

    // term := factor (('*' | '/' | '%') factor)*
    fn term(&mut self) -> Result<Value, EvalError> {
        let mut left = self.factor()?;

        while let Some(op) = self.eat_any(&[
            TokenKind::Multiply,
            TokenKind::Divide,
            TokenKind::Modulo,
        ]) {
            let op_pos = self.pos - 1;
            let right = self.factor()?;
            left = match op {
                TokenKind::Multiply => left.checked_mul(right),
                TokenKind::Divide => left.checked_div(right),
                _ => left.checked_rem(right),
            }
            .map_err(at(op_pos))?;
        }

        Ok(left)
    }

    // factor := primary ('^' factor)?
    //
    // Operands are collected first and folded from the right, so long
    // `^` chains do not grow the stack.
    fn factor(&mut self) -> Result<Value, EvalError> {
        let first = self.primary()?;
        // (position of the `^`, operand to its right)
        let mut rest = Vec::new();

        while self.eat_any(&[TokenKind::Power]).is_some() {
            let op_pos = self.pos - 1;
            rest.push((op_pos, self.primary()?));
        }

        let Some((mut op_pos, mut exponent)) = rest.pop() else {
            return Ok(first);
        };
        while let Some((prev_op_pos, base)) = rest.pop() {
            exponent = base.checked_pow(exponent).map_err(at(op_pos))?;
            op_pos = prev_op_pos;
        }
        first.checked_pow(exponent).map_err(at(op_pos))
    }

    fn primary(&mut self) -> Result<Value, EvalError> {
        let tokens = self.tokens;
        let position = self.pos;
        let Some(token) = tokens.get(position) else {
            return Err(EvalError {
                kind: EvalErrorKind::UnexpectedEndOfInput,
                position,
            });
        };
        self.pos += 1;

        match token.kind {
            TokenKind::Integer => token
                .text
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| at(position)(EvalErrorKind::Overflow)),
            TokenKind::Float => token.text.parse::<f64>().map(Value::Float).map_err(|_| {
                at(position)(EvalErrorKind::SyntaxError {
                    expected: Expected::Expression,
                    found: Some(token.text.clone()),
                })
            }),
            TokenKind::Identifier => self.call(token, position),
            _ => Err(EvalError {
                kind: EvalErrorKind::SyntaxError {
                    expected: Expected::Expression,
                    found: Some(token.text.clone()),
                },
                position,
            }),
        }
    }

    /// Built-in call: `name '(' expression (',' expression)* ')'`, with
    /// exactly as many arguments as the function's arity.
    fn call(&mut self, name: &Token, position: usize) -> Result<Value, EvalError> {
        let builtin = Builtin::from_name(&name.text).ok_or_else(|| EvalError {
            kind: EvalErrorKind::UnknownIdentifier {
                name: name.text.clone(),
            },
            position,
        })?;

        self.expect(TokenKind::LeftParen, Expected::LeftParen)?;
        if self.depth >= MAX_NESTING {
            return Err(EvalError {
                kind: EvalErrorKind::NestingTooDeep,
                position,
            });
        }

        self.depth += 1;
        let args = self.arguments(builtin.arity())?;
        self.depth -= 1;

        builtin.call(&args).map_err(at(position))
    }

    // arguments := expression (',' expression)* ')'
    fn arguments(&mut self, arity: usize) -> Result<Vec<Value>, EvalError> {
        let mut args = Vec::with_capacity(arity);
        args.push(self.expression()?);
        for _ in 1..arity {
            self.expect(TokenKind::Comma, Expected::Comma)?;
            args.push(self.expression()?);
        }
        self.expect(TokenKind::RightParen, Expected::RightParen)?;
        Ok(args)
    }
}
