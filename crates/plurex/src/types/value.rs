use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Gender, Number, PluralCategory};

/// A runtime value bound to a variable in an evaluation context.
///
/// Conditions compare numbers, genders and plural categories. Strings can be
/// bound too, but the evaluator cannot compare them: any comparison touching
/// one is simply false.
///
/// # Example
///
/// ```
/// use plurex::{Gender, Value};
///
/// let count: Value = 3.into();
/// let gender: Value = Gender::Feminine.into();
/// let missing: Value = None::<i64>.into();
///
/// assert_eq!(count.as_number(), Some(3));
/// assert_eq!(gender.as_gender(), Some(Gender::Feminine));
/// assert!(missing.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value. Never comparable.
    String(String),

    /// A grammatical gender.
    Gender(Gender),

    /// An already resolved plural category.
    Plural(PluralCategory),

    /// An optional value; `None` behaves like [`Value::Null`].
    Optional(Option<Box<Value>>),

    /// An explicitly absent value.
    Null,
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a [`Number`], if it is numeric.
    pub fn as_numeric(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(Number::Integer(*n)),
            Value::Float(f) => Some(Number::decimal(*f)),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_gender(&self) -> Option<Gender> {
        match self {
            Value::Gender(g) => Some(*g),
            _ => None,
        }
    }

    pub fn as_plural(&self) -> Option<PluralCategory> {
        match self {
            Value::Plural(p) => Some(*p),
            _ => None,
        }
    }

    /// True for `Null` and for an empty `Optional`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::Optional(None))
    }

    /// Unwrap one level of `Optional`.
    ///
    /// Returns `None` for null values; nested optionals are returned as-is.
    pub fn unwrap_optional(&self) -> Option<&Value> {
        match self {
            Value::Null | Value::Optional(None) => None,
            Value::Optional(Some(inner)) => Some(inner),
            other => Some(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Gender(g) => write!(f, "{g}"),
            Value::Plural(p) => write!(f, "{p}"),
            Value::Optional(Some(inner)) => write!(f, "{inner}"),
            Value::Optional(None) | Value::Null => f.write_str("null"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Values above `i64::MAX` become floats.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(n) => Value::Number(n),
            Number::Decimal { value, .. } => Value::Float(value),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Gender> for Value {
    fn from(g: Gender) -> Self {
        Value::Gender(g)
    }
}

impl From<PluralCategory> for Value {
    fn from(p: PluralCategory) -> Self {
        Value::Plural(p)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Optional(value.map(|v| Box::new(v.into())))
    }
}
