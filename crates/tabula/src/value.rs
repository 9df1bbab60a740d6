//! Dynamically typed values and keys.
//!
//! This module defines the [`Value`] enum, the closed set of shapes a table
//! entry can take, and the [`Key`] enum, the smaller closed set of shapes a
//! table key can take.
use alloc::string::String;
use core::fmt;

use crate::table::Table;

/// A dynamically typed value, as stored in a [`Table`].
///
/// Every algorithm in this crate is defined over `Value`, so behavior on
/// mixed-type tables is explicit rather than left to runtime coercion.
///
/// # Examples
///
/// ```
/// use tabula::Value;
///
/// let v = Value::from("hello");
/// assert!(v.is_text());
/// assert_eq!(v.to_string(), "hello");
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value. The return of a lookup that found nothing.
    #[default]
    Absent,
    /// A boolean.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A piece of text.
    Text(String),
    /// A nested table.
    Table(Table),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Table> for Value {
    fn from(v: Table) -> Self {
        Self::Table(v)
    }
}

impl From<Key> for Value {
    fn from(k: Key) -> Self {
        match k {
            Key::Integer(i) => Self::Integer(i),
            Key::Text(s) => Self::Text(s),
            Key::Boolean(b) => Self::Boolean(b),
        }
    }
}

impl Value {
    /// Returns `true` if the value is [`Absent`].
    ///
    /// [`Absent`]: Value::Absent
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`] or [`Float`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Returns `true` if the value is [`Text`].
    ///
    /// [`Text`]: Value::Text
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }

    /// Returns `true` if the value is [`Table`].
    ///
    /// [`Table`]: Value::Table
    #[must_use]
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(..))
    }

    /// Borrows the inner table, if the value is one.
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Mutably borrows the inner table, if the value is one.
    #[must_use]
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Both numeric kinds widened to `f64`, for cross-kind comparison.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The name of the value's kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Boolean(..) => "boolean",
            Self::Integer(..) => "integer",
            Self::Float(..) => "float",
            Self::Text(..) => "text",
            Self::Table(..) => "table",
        }
    }
}

/// The textual representation of a value.
///
/// `Absent` renders as the empty string, text renders verbatim (no quoting),
/// and tables render recursively. This is the comparison domain used by
/// [`Table::equals`] and the conversion applied by
/// [`StringBuffer::append`](crate::StringBuffer::append).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
            Value::Table(t) => t.fmt(f),
        }
    }
}

/// A table key: one of the closed set of primitive key kinds.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// An integer key. Dense arrays use exactly `1..=n`.
    Integer(i64),
    /// A text key.
    Text(String),
    /// A boolean key.
    Boolean(bool),
}

impl From<i64> for Key {
    fn from(k: i64) -> Self {
        Self::Integer(k)
    }
}

impl From<&str> for Key {
    fn from(k: &str) -> Self {
        Self::Text(String::from(k))
    }
}

impl From<String> for Key {
    fn from(k: String) -> Self {
        Self::Text(k)
    }
}

impl From<bool> for Key {
    fn from(k: bool) -> Self {
        Self::Boolean(k)
    }
}

impl Key {
    /// Converts a value into a key, for [`Table::flipped`].
    ///
    /// Floats, tables, and absent values cannot serve as keys and yield
    /// `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::Integer(i) => Some(Key::Integer(*i)),
            Value::Text(s) => Some(Key::Text(s.clone())),
            Value::Boolean(b) => Some(Key::Boolean(*b)),
            Value::Absent | Value::Float(..) | Value::Table(..) => None,
        }
    }
}

/// Consistent with the textual representation of [`Value`].
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Integer(i) => write!(f, "{i}"),
            Key::Text(s) => f.write_str(s),
            Key::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::*;

    use super::*;

    #[rstest]
    #[case(Value::Absent, "")]
    #[case(Value::Boolean(true), "true")]
    #[case(Value::Integer(-3), "-3")]
    #[case(Value::Float(1.5), "1.5")]
    #[case(Value::from("plain"), "plain")]
    fn textual_representation(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Value::Integer(4), Some(Key::Integer(4)))]
    #[case(Value::from("k"), Some(Key::from("k")))]
    #[case(Value::Boolean(false), Some(Key::Boolean(false)))]
    #[case(Value::Float(0.5), None)]
    #[case(Value::Absent, None)]
    fn key_from_value(#[case] value: Value, #[case] expected: Option<Key>) {
        assert_eq!(Key::from_value(&value), expected);
    }

    #[rstest]
    #[case(Value::Absent, "absent")]
    #[case(Value::Integer(0), "integer")]
    #[case(Value::Table(Table::new()), "table")]
    fn kind_names(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.kind(), expected);
    }
}
