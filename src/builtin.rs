use crate::evaluator::EvalErrorKind;
use crate::value::Value;

/// Functions callable from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Sqrt,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
    Abs,
    /// `pow(base, exponent)`, same semantics as `^`.
    Pow,
}

impl Builtin {
    pub const ALL: [Self; 8] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
        Self::Abs,
        Self::Pow,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Abs => "abs",
            Self::Pow => "pow",
        }
    }

    /// Number of comma-separated arguments the function takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Pow => 2,
            _ => 1,
        }
    }

    /// Apply the function. `args.len()` must equal [`Self::arity`].
    pub(crate) fn call(self, args: &[Value]) -> Result<Value, EvalErrorKind> {
        debug_assert_eq!(args.len(), self.arity());
        if self == Self::Pow {
            return args[0].checked_pow(args[1]);
        }

        let arg = args[0];
        if let (Self::Abs, Value::Integer(i)) = (self, arg) {
            return i.checked_abs().map(Value::Integer).ok_or(EvalErrorKind::Overflow);
        }

        let x = arg.as_f64();
        let in_domain = match self {
            Self::Sin | Self::Cos | Self::Tan => !x.is_infinite(),
            Self::Sqrt => x >= 0.0 || x.is_nan(),
            Self::Log | Self::Ln => x > 0.0 || x.is_nan(),
            Self::Abs | Self::Pow => true,
        };
        if !in_domain {
            return Err(EvalErrorKind::DomainError {
                function: self.name(),
            });
        }

        let result = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Sqrt => x.sqrt(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Abs | Self::Pow => x.abs(),
        };
        Ok(Value::Float(result))
    }
}
