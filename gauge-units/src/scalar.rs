//! Numeric input classification
//!
//! Unit definitions only accept genuine floating-point values. `Scalar`
//! remembers whether a number arrived as a float or as an integer so the
//! registry can reject the latter instead of silently coercing it.

use std::fmt;
use crate::UnitError;

/// A numeric value tagged with the kind it was supplied as
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Float(f64),
    Integer(i128),
}

impl Scalar {
    /// Name of the supplied kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Float(_) => "float",
            Scalar::Integer(_) => "integer",
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    /// Accept only a finite float; `what` names the field in the error
    pub fn require_float(self, what: &str) -> Result<f64, UnitError> {
        match self {
            Scalar::Float(v) if v.is_finite() => Ok(v),
            Scalar::Float(v) => Err(UnitError::unit_parse(format!(
                "{} ({}) must be a finite float.",
                what, v
            ))),
            Scalar::Integer(_) => Err(UnitError::unit_parse(format!(
                "{} ({}) must be a float, got an {}.",
                what, self, self.kind()
            ))),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Float(v) => write!(f, "{:?}", v),
            Scalar::Integer(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(f64::from(v))
    }
}

macro_rules! integer_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Integer(i128::from(v))
                }
            }
        )*
    };
}

integer_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_accepted() {
        assert_eq!(Scalar::from(0.3048).require_float("base_value"), Ok(0.3048));
        assert_eq!(Scalar::from(1.5f32).require_float("base_value"), Ok(1.5));
    }

    #[test]
    fn test_integer_rejected() {
        let err = Scalar::from(5).require_float("base_value").unwrap_err();
        assert_eq!(err.to_string(), "base_value (5) must be a float, got an integer.");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Scalar::from(f64::NAN).require_float("offset").is_err());
        assert!(Scalar::from(f64::INFINITY).require_float("offset").is_err());
    }

    #[test]
    fn test_display_keeps_float_form() {
        assert_eq!(Scalar::from(5.0).to_string(), "5.0");
        assert_eq!(Scalar::from(5u8).to_string(), "5");
    }
}
