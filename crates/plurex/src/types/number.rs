use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric operand, either read from a literal or taken from the context.
///
/// Integers stay exact; anything with a fractional part is an `f64`.
/// Decimals remember how many fraction digits were written, since plural
/// rules distinguish `1` from `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Integer(i64),
    Decimal { value: f64, fraction_digits: usize },
}

impl Number {
    /// A decimal shown with its shortest round-trip fraction digits.
    pub fn decimal(value: f64) -> Number {
        let fraction_digits = if value.is_finite() {
            value
                .to_string()
                .split_once('.')
                .map_or(0, |(_, fraction)| fraction.len())
        } else {
            0
        };
        Number::Decimal {
            value,
            fraction_digits,
        }
    }

    /// Parse literal text such as `42`, `1.5` or `1.0`.
    ///
    /// Integers too large for `i64` fall back to `f64`. Trailing fraction
    /// zeros are kept in `fraction_digits`.
    pub fn parse(text: &str) -> Option<Number> {
        match text.split_once('.') {
            None => match text.parse::<i64>() {
                Ok(n) => Some(Number::Integer(n)),
                Err(_) => text.parse::<f64>().ok().map(Number::decimal),
            },
            Some((_, fraction)) => text.parse::<f64>().ok().map(|value| Number::Decimal {
                value,
                fraction_digits: fraction.len(),
            }),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Decimal { value, .. } => value,
        }
    }

    /// Compare two numbers, exactly when both are integers.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Decimal {
                value,
                fraction_digits,
            } if value.is_finite() => write!(f, "{value:.fraction_digits$}"),
            Number::Decimal { value, .. } => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::decimal(n)
    }
}
