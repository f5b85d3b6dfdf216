//! Arithmetic evaluator for `calc:` messages
//!
//! Only decimal literals, `+ - * /`, parentheses and whitespace are accepted;
//! anything else is rejected by the lexer. Integers stay integers under
//! `+ - *`, `/` always produces a float.

mod lexer;
mod parser;

use std::fmt;

use thiserror::Error;

pub use lexer::{tokenize, Token};

/// Maximum parenthesis / unary nesting accepted by the parser
pub const MAX_DEPTH: usize = 64;

/// Why an expression could not be evaluated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("empty expression")]
    Empty,

    #[error("unexpected {0}")]
    UnexpectedToken(Token),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric overflow")]
    Overflow,

    #[error("expression nested deeper than {} levels", MAX_DEPTH)]
    TooDeep,
}

/// Result of an evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn checked_float(value: f64) -> Result<Number, CalcError> {
        if value.is_finite() {
            Ok(Number::Float(value))
        } else {
            Err(CalcError::Overflow)
        }
    }

    fn binary(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Number, CalcError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => int_op(a, b).map(Number::Int).ok_or(CalcError::Overflow),
            (a, b) => Number::checked_float(float_op(a.as_f64(), b.as_f64())),
        }
    }

    pub fn add(self, rhs: Number) -> Result<Number, CalcError> {
        self.binary(rhs, i64::checked_add, |a, b| a + b)
    }

    pub fn sub(self, rhs: Number) -> Result<Number, CalcError> {
        self.binary(rhs, i64::checked_sub, |a, b| a - b)
    }

    pub fn mul(self, rhs: Number) -> Result<Number, CalcError> {
        self.binary(rhs, i64::checked_mul, |a, b| a * b)
    }

    pub fn div(self, rhs: Number) -> Result<Number, CalcError> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Number::checked_float(self.as_f64() / divisor)
    }

    pub fn neg(self) -> Result<Number, CalcError> {
        match self {
            Number::Int(i) => i.checked_neg().map(Number::Int).ok_or(CalcError::Overflow),
            Number::Float(f) => Ok(Number::Float(-f)),
        }
    }
}

impl fmt::Display for Number {
    /// Integers print bare, floats always carry a fractional part (`2.0`)
    /// or a signed two-digit exponent (`1e+16`, `1e-07`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip form; switches to exponent notation below 1e-4 and
/// from 1e16 up.
fn format_float(x: f64) -> String {
    let shortest = format!("{:?}", x);
    match shortest.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => shortest,
    }
}

/// Evaluates an arithmetic expression with the usual precedence.
///
/// # Example
///
/// ```
/// use gakrcore::calc::{evaluate, Number};
///
/// assert_eq!(evaluate("2*(3+4)").unwrap(), Number::Int(14));
/// assert!(evaluate("1/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<Number, CalcError> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }
    parser::Parser::new(&tokens).parse()
}
