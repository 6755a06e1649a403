//! JSON scalar value types.
//!
//! This module defines the [`Value`] enum, the parsed representation of a
//! JSON scalar, and the [`ValueKind`] tag used to inspect its active variant.

use core::fmt;

/// A standalone JSON scalar value.
///
/// The variant set is closed: this stage of the grammar only produces
/// `null`, booleans, and numbers. Numbers are stored as `f64`, matching the
/// double-precision semantics of JSON.
///
/// # Examples
///
/// ```
/// use jsonatom::Value;
///
/// let v: Value = "-1.5e3".parse().unwrap();
/// assert_eq!(v, Value::Number(-1500.0));
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// The literal `null`.
    Null,
    /// The literals `true` and `false`.
    Boolean(bool),
    /// A JSON number, converted to double precision.
    Number(f64),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl core::str::FromStr for Value {
    type Err = crate::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl Value {
    /// Returns the tag of the active variant.
    ///
    /// ```
    /// use jsonatom::{Value, ValueKind};
    ///
    /// assert_eq!(Value::Boolean(true).kind(), ValueKind::True);
    /// assert_eq!(Value::default().kind(), ValueKind::Null);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(true) => ValueKind::True,
            Self::Boolean(false) => ValueKind::False,
            Self::Number(_) => ValueKind::Number,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns the boolean payload, or `None` for other variants.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric payload, or `None` for other variants.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not [`Number`]. Reading the number out of a
    /// non-number value is a contract violation by the caller, not a
    /// recoverable parse error; use [`as_number`] to branch on the variant.
    ///
    /// [`Number`]: Value::Number
    /// [`as_number`]: Value::as_number
    #[must_use]
    pub fn number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            other => panic!("number() called on a {} value", other.kind()),
        }
    }
}

/// The variant tag of a [`Value`], with `true` and `false` distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The `null` literal.
    Null,
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// A number.
    Number,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Number => "number",
        })
    }
}
