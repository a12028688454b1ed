use std::fmt;

use crate::evaluator::EvalErrorKind;

/// Numeric value produced by the evaluator.
///
/// Integer arithmetic stays exact until an operator or operand forces
/// promotion to floating point. Integer overflow is reported, never
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Widen to `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// `0`, `0.0` and `-0.0` are zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, EvalErrorKind> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => integer(a.checked_add(b)),
            _ => Ok(Self::Float(self.as_f64() + rhs.as_f64())),
        }
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, EvalErrorKind> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => integer(a.checked_sub(b)),
            _ => Ok(Self::Float(self.as_f64() - rhs.as_f64())),
        }
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self, EvalErrorKind> {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => integer(a.checked_mul(b)),
            _ => Ok(Self::Float(self.as_f64() * rhs.as_f64())),
        }
    }

    /// True division: the result is always a float.
    pub fn checked_div(self, rhs: Self) -> Result<Self, EvalErrorKind> {
        if rhs.is_zero() {
            return Err(EvalErrorKind::DivisionByZero);
        }
        Ok(Self::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Floored modulo: a non-zero result takes the sign of the divisor.
    pub fn checked_rem(self, rhs: Self) -> Result<Self, EvalErrorKind> {
        if rhs.is_zero() {
            return Err(EvalErrorKind::ModuloByZero);
        }
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                // i64::MIN % -1 is 0, not an overflow
                let r = a.wrapping_rem(b);
                if r != 0 && (r < 0) != (b < 0) {
                    Ok(Self::Integer(r + b))
                } else {
                    Ok(Self::Integer(r))
                }
            }
            _ => {
                let (a, b) = (self.as_f64(), rhs.as_f64());
                let r = a % b;
                if r == 0.0 {
                    Ok(Self::Float(0.0_f64.copysign(b)))
                } else if (r < 0.0) != (b < 0.0) {
                    Ok(Self::Float(r + b))
                } else {
                    Ok(Self::Float(r))
                }
            }
        }
    }

    /// Exponentiation.
    ///
    /// Integer base and non-negative integer exponent use checked integer
    /// arithmetic. Negative integer exponents and float operands are
    /// computed with `powf`.
    pub fn checked_pow(self, exponent: Self) -> Result<Self, EvalErrorKind> {
        if let (Self::Integer(b), Self::Integer(e)) = (self, exponent) {
            if e >= 0 {
                return match u32::try_from(e) {
                    Ok(e) => integer(b.checked_pow(e)),
                    Err(_) => match b {
                        0 | 1 => Ok(Self::Integer(b)),
                        -1 => Ok(Self::Integer(if e % 2 == 0 { 1 } else { -1 })),
                        _ => Err(EvalErrorKind::Overflow),
                    },
                };
            }
        }

        let (b, e) = (self.as_f64(), exponent.as_f64());
        if self.is_zero() && e < 0.0 {
            return Err(EvalErrorKind::DivisionByZero);
        }
        if b < 0.0 && e.is_finite() && e.fract() != 0.0 {
            return Err(EvalErrorKind::DomainError { function: "pow" });
        }

        let r = b.powf(e);
        if r.is_infinite() && b.is_finite() && e.is_finite() {
            return Err(EvalErrorKind::Overflow);
        }
        Ok(Self::Float(r))
    }
}

fn integer(result: Option<i64>) -> Result<Value, EvalErrorKind> {
    result.map(Value::Integer).ok_or(EvalErrorKind::Overflow)
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_nan() => f.write_str("nan"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "inf" } else { "-inf" })
            }
            // very large or small magnitudes switch to exponent form
            Self::Float(x) if x != 0.0 && !(1e-4..1e16).contains(&x.abs()) => {
                write!(f, "{x:e}")
            }
            // keep a visible decimal point so floats never look like integers
            Self::Float(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
