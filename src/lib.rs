//! Expression tokenizer and evaluator.
//!
//! A two-stage pipeline: [`tokenize`] turns source text into typed
//! tokens with line/column positions, and [`evaluate`] parses and
//! evaluates an arithmetic expression over those tokens in a single
//! recursive-descent pass.
//!
//! The tokenizer understands a slightly larger language than the
//! evaluator: keywords (`def`, `extern`, `if`, `then`, `else`, `for`,
//! `in`), comparison operators and `;` are lexed but never evaluated.
//!
//! # Quick start
//!
//! ```
//! use lexcalc::{Value, calculate, evaluate, tokenize};
//!
//! let tokens = tokenize("2 ^ 3 ^ 2");
//! // drop END_OF_INPUT before evaluating
//! let value = evaluate(&tokens[..tokens.len() - 1]).unwrap();
//! assert_eq!(value, Value::Integer(512));
//!
//! let calc = calculate("sqrt(16) + pow(2, 3)").unwrap();
//! assert_eq!(calc.value.to_string(), "12.0");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::time::Duration;

pub mod builtin;
pub mod evaluator;
pub mod lexer;
pub mod timing;
pub mod token;
pub mod value;

pub use builtin::Builtin;
pub use evaluator::{EvalError, EvalErrorKind, Expected, MAX_NESTING, evaluate, evaluate_timed};
pub use lexer::{tokenize, tokenize_timed};
pub use timing::Timed;
pub use token::{Span, Token, TokenCategory, TokenKind};
pub use value::Value;

/// Everything one pass through the pipeline produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    /// Scanned tokens, without `END_OF_INPUT`.
    pub tokens: Vec<Token>,
    pub value: Value,
    pub scan_time: Duration,
    pub eval_time: Duration,
}

impl Calculation {
    /// Combined tokenize and evaluate time in milliseconds.
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        (self.scan_time + self.eval_time).as_secs_f64() * 1000.0
    }
}

/// Tokenize and evaluate a source string in one step.
pub fn calculate(input: &str) -> Result<Calculation, EvalError> {
    let Timed {
        value: mut tokens,
        elapsed: scan_time,
    } = tokenize_timed(input);
    tokens.pop();

    let Timed {
        value,
        elapsed: eval_time,
    } = evaluate_timed(&tokens)?;

    Ok(Calculation {
        tokens,
        value,
        scan_time,
        eval_time,
    })
}
