//! # Function Whitelist
//!
//! The only functions an expression may call. Each takes one argument and
//! works in radians. Arguments outside a function's domain are reported as
//! [`EvalError::Domain`] instead of producing NaN.

use crate::error::EvalError;

/// Whitelisted single-argument numeric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine (radians)
    Sin,
    /// Cosine (radians)
    Cos,
    /// Tangent (radians)
    Tan,
    /// Arc sine, domain [-1, 1]
    Asin,
    /// Arc cosine, domain [-1, 1]
    Acos,
    /// Arc tangent
    Atan,
    /// Hyperbolic sine
    Sinh,
    /// Hyperbolic cosine
    Cosh,
    /// Hyperbolic tangent
    Tanh,
    /// Natural exponential
    Exp,
    /// Natural logarithm, domain (0, inf)
    Log,
    /// Base-10 logarithm, domain (0, inf)
    Log10,
    /// Base-2 logarithm, domain (0, inf)
    Log2,
    /// Square root, domain [0, inf)
    Sqrt,
    /// Absolute value
    Abs,
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    Ceil,
}

impl Function {
    /// Every whitelisted function.
    pub const ALL: [Function; 17] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Exp,
        Self::Log,
        Self::Log10,
        Self::Log2,
        Self::Sqrt,
        Self::Abs,
        Self::Floor,
        Self::Ceil,
    ];

    /// Look up a function by its source name.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use surface_expr::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("eval"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Source name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }

    /// Apply the function, rejecting arguments outside its domain.
    pub fn apply(self, x: f64) -> Result<f64, EvalError> {
        let in_domain = match self {
            Self::Asin | Self::Acos => (-1.0..=1.0).contains(&x),
            Self::Log | Self::Log10 | Self::Log2 => x > 0.0,
            Self::Sqrt => x >= 0.0,
            _ => true,
        };
        if !in_domain {
            return Err(EvalError::Domain {
                function: self.name(),
                argument: x,
            });
        }

        Ok(match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Exp => x.exp(),
            Self::Log => x.ln(),
            Self::Log10 => x.log10(),
            Self::Log2 => x.log2(),
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
        })
    }
}
