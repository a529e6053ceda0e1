//! Caller-boundary numeric value.
//!
//! Keeps the integer/decimal distinction from the input: integers render as
//! plain words, decimals render as a currency amount (`1` is "one", `1.0`
//! is "one rupee").

use std::fmt;
use std::str::FromStr;

use crate::error::{NepNumError, NepNumResult};

/// A signed numeric quantity, integral or with a fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Integral magnitude
    Int(i64),
    /// Integral-plus-fractional magnitude
    Decimal(f64),
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl FromStr for Amount {
    type Err = NepNumError;

    /// Text containing a decimal point parses as a decimal, anything else
    /// as an integer.
    fn from_str(s: &str) -> NepNumResult<Self> {
        let text = s.trim();
        if text.contains('.') {
            text.parse::<f64>()
                .map(Self::Decimal)
                .map_err(|_| NepNumError::InvalidNumber(text.to_string()))
        } else {
            text.parse::<i64>()
                .map(Self::Int)
                .map_err(|_| NepNumError::InvalidNumber(text.to_string()))
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Decimal(value) => write!(f, "{}", value),
        }
    }
}
