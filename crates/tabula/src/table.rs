//! The insertion-ordered table container and its algorithms.
//!
//! A [`Table`] is an ordered sequence of `(Key, Value)` entries. Every
//! operation that cares about shape first classifies the table as either a
//! dense array (key set exactly `1..=n`) or an ordinary mapping, and picks
//! ordered or unordered semantics accordingly. Classification is recomputed
//! on every call; tables are mutable and the verdict is never cached.
//!
//! Iteration order is insertion order, and all order-sensitive algorithms
//! (`flipped`, `find_value`, map-mode `equals`) are deterministic under it.
use alloc::{string::ToString, vec, vec::Vec};
use core::fmt;

use crate::{
    error::TableError,
    value::{Key, Value},
};

/// An ordered sequence of key-value entries.
///
/// # Examples
///
/// ```
/// use tabula::{table, Key, Value};
///
/// let mut t = table![1, 2, 3];
/// assert!(t.is_array());
/// assert!(t.push(Value::from(4)));
/// assert_eq!(t.pop(), Value::from(4));
///
/// let m = table! { "a" => 1, "b" => 2 };
/// assert!(!m.is_array());
/// assert_eq!(m.get(&Key::from("b")), Some(&Value::from(2)));
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub(crate) entries: Vec<(Key, Value)>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an array of `n` copies of `initial`, indexed `1..=n`.
    ///
    /// Returns an empty table when `n` is not positive or `initial` is
    /// absent.
    #[must_use]
    pub fn filled(n: i64, initial: &Value) -> Self {
        let mut out = Self::new();
        if initial.is_absent() {
            return out;
        }
        for i in 1..=n.max(0) {
            out.entries.push((Key::Integer(i), initial.clone()));
        }
        out
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classifies the table: `true` iff the key set is exactly `{1..=n}`.
    ///
    /// The empty table is array-classified. The check is over the key *set*,
    /// so a permuted insertion order of `1..=n` still classifies as an
    /// array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        let n = self.entries.len();
        let mut seen = vec![false; n];
        for (key, _) in &self.entries {
            let Key::Integer(i) = key else { return false };
            if *i < 1 || *i > n as i64 {
                return false;
            }
            #[allow(clippy::cast_sign_loss)]
            let slot = &mut seen[(*i - 1) as usize];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Inserts or replaces the value under `key`.
    ///
    /// Replacing keeps the entry's original position; inserting appends.
    pub fn set(&mut self, key: Key, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Removes the entry under `key`, returning its value.
    ///
    /// Later entries shift down, preserving their relative order.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Returns whether any entry has key equal to `key`.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Scans entries in insertion order for `value`, returning the key of
    /// the first match.
    #[must_use]
    pub fn find_value(&self, value: &Value) -> Option<&Key> {
        self.entries
            .iter()
            .find(|(_, v)| v == value)
            .map(|(k, _)| k)
    }

    /// Appends `value` at index `n + 1`.
    ///
    /// Only valid on array-classified tables; returns `false` without
    /// touching the table otherwise.
    pub fn push(&mut self, value: Value) -> bool {
        if !self.is_array() {
            return false;
        }
        let next = self.entries.len() as i64 + 1;
        self.entries.push((Key::Integer(next), value));
        true
    }

    /// Removes and returns the element at index `n`.
    ///
    /// Returns [`Value::Absent`] when the table is empty or not
    /// array-classified.
    pub fn pop(&mut self) -> Value {
        if self.entries.is_empty() || !self.is_array() {
            return Value::Absent;
        }
        let last = Key::Integer(self.entries.len() as i64);
        // The key set is exactly 1..=n, so key n is present somewhere.
        match self.entries.iter().position(|(k, _)| *k == last) {
            Some(pos) => self.entries.remove(pos).1,
            None => Value::Absent,
        }
    }

    /// A new array of the table's keys, in insertion order.
    #[must_use]
    pub fn keys(&self) -> Table {
        self.entries
            .iter()
            .map(|(k, _)| Value::from(k.clone()))
            .collect()
    }

    /// A new array of the table's values, in insertion order.
    #[must_use]
    pub fn values(&self) -> Table {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    /// A new table with keys and values swapped.
    ///
    /// Values that cannot serve as keys (floats, tables, absent) are
    /// skipped. When two entries share a value, the last one written in
    /// insertion order wins.
    #[must_use]
    pub fn flipped(&self) -> Table {
        let mut out = Table::new();
        for (key, value) in &self.entries {
            if let Some(flipped_key) = Key::from_value(value) {
                out.set(flipped_key, Value::from(key.clone()));
            }
        }
        out
    }

    /// A new array with the elements in reverse positional order.
    ///
    /// Returns an empty table for map-classified input.
    #[must_use]
    pub fn reversed(&self) -> Table {
        if !self.is_array() {
            return Table::new();
        }
        let n = self.entries.len() as i64;
        (1..=n)
            .rev()
            .filter_map(|i| self.get(&Key::Integer(i)).cloned())
            .collect()
    }

    /// Compares two tables by the textual representation of their contents.
    ///
    /// When both are array-classified the comparison is positional over
    /// indices `1..=n`. Otherwise every entry of `self` must be matched by
    /// some entry of `other` with textually equal key and value; together
    /// with the entry-count check this is full set equality.
    #[must_use]
    pub fn equals(&self, other: &Table) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.is_array() && other.is_array() {
            (1..=self.len() as i64).all(|i| {
                let key = Key::Integer(i);
                match (self.get(&key), other.get(&key)) {
                    (Some(a), Some(b)) => a.to_string() == b.to_string(),
                    _ => false,
                }
            })
        } else {
            self.entries.iter().all(|(k1, v1)| {
                other.entries.iter().any(|(k2, v2)| {
                    k1.to_string() == k2.to_string() && v1.to_string() == v2.to_string()
                })
            })
        }
    }
}

/// Builds a table by `set`, so later duplicate keys overwrite earlier ones.
impl FromIterator<(Key, Value)> for Table {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut out = Table::new();
        for (key, value) in iter {
            out.set(key, value);
        }
        out
    }
}

/// Builds an array-classified table, indexed `1..=n`.
impl FromIterator<Value> for Table {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut out = Table::new();
        for (i, value) in iter.into_iter().enumerate() {
            out.entries.push((Key::Integer(i as i64 + 1), value));
        }
        out
    }
}

/// Arrays render as `[v1, v2, ...]`, mappings as `{k=v, ...}`.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array() {
            f.write_str("[")?;
            for (i, key) in (1..=self.entries.len() as i64).enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                if let Some(value) = self.get(&Key::Integer(key)) {
                    write!(f, "{value}")?;
                }
            }
            f.write_str("]")
        } else {
            f.write_str("{")?;
            for (i, (key, value)) in self.entries.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            f.write_str("}")
        }
    }
}

/// Macro to build a [`Table`] from either a list of values (an array) or
/// `key => value` pairs (a mapping).
///
/// ```rust
/// use tabula::table;
///
/// let array = table![1, 2, 3];
/// assert!(array.is_array());
///
/// let mapping = table! { "a" => 1, 2 => "b" };
/// assert!(!mapping.is_array());
/// assert_eq!(mapping.len(), 2);
/// ```
#[macro_export]
macro_rules! table {
    ( $( $key:expr => $val:expr ),+ $(,)? ) => {{
        let mut t = $crate::Table::new();
        $( t.set($crate::Key::from($key), $crate::Value::from($val)); )+
        t
    }};
    ( $( $val:expr ),* $(,)? ) => {{
        let mut t = $crate::Table::new();
        $( t.push($crate::Value::from($val)); )*
        t
    }};
}

/// Classifies a dynamic value: `true` only for an array-classified table.
#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.as_table().is_some_and(Table::is_array)
}

/// The entry count of a dynamic value; `0` for anything but a table.
#[must_use]
pub fn count(value: &Value) -> usize {
    value.as_table().map_or(0, Table::len)
}

/// The keys of a dynamic value; an empty table for anything but a table.
#[must_use]
pub fn keys(value: &Value) -> Table {
    value.as_table().map_or_else(Table::new, Table::keys)
}

/// The values of a dynamic value; an empty table for anything but a table.
#[must_use]
pub fn values(value: &Value) -> Table {
    value.as_table().map_or_else(Table::new, Table::values)
}

/// The flipped form of a dynamic value; empty for anything but a table.
#[must_use]
pub fn flip(value: &Value) -> Table {
    value.as_table().map_or_else(Table::new, Table::flipped)
}

/// The reversed form of a dynamic value; empty for anything but an
/// array-classified table.
#[must_use]
pub fn reverse(value: &Value) -> Table {
    value.as_table().map_or_else(Table::new, Table::reversed)
}

/// Textual equality of two dynamic values; `false` unless both are tables
/// that satisfy [`Table::equals`].
#[must_use]
pub fn equals(a: &Value, b: &Value) -> bool {
    match (a.as_table(), b.as_table()) {
        (Some(a), Some(b)) => a.equals(b),
        _ => false,
    }
}

fn expect_table(value: &Value) -> Result<&Table, TableError> {
    value.as_table().ok_or(TableError::NotATable {
        found: value.kind(),
    })
}

/// The next free positive integer index, PHP-style: one past the largest
/// positive integer key already present.
fn next_index(table: &Table) -> i64 {
    table
        .entries
        .iter()
        .filter_map(|(k, _)| match k {
            Key::Integer(i) if *i >= 1 => Some(*i),
            _ => None,
        })
        .max()
        .unwrap_or(0)
        + 1
}

fn merge_into(out: &mut Table, src: &Table) {
    if src.is_array() {
        for (_, value) in src.iter() {
            let next = next_index(out);
            out.set(Key::Integer(next), value.clone());
        }
    } else {
        for (key, value) in src.iter() {
            out.set(key.clone(), value.clone());
        }
    }
}

/// Combines two tables into a new one.
///
/// Array-classified inputs contribute their values, re-indexed onto the end
/// of the accumulator; map-classified inputs are copied key-preserving, with
/// `b` overwriting `a` on key collision.
///
/// # Errors
///
/// [`TableError::NotATable`] when either argument is not a table.
pub fn combine(a: &Value, b: &Value) -> Result<Table, TableError> {
    let (a, b) = (expect_table(a)?, expect_table(b)?);
    let mut out = Table::new();
    merge_into(&mut out, a);
    merge_into(&mut out, b);
    Ok(out)
}

/// Intersects two tables into a new one.
///
/// When both are array-classified: each value of `a` that occurs anywhere in
/// `b` (by value equality, first match wins) is included once, re-indexed,
/// preserving `a`'s order. Otherwise: each entry of `a` is included only if
/// `b` maps the same key to an equal value, preserving `a`'s keys.
///
/// # Errors
///
/// [`TableError::NotATable`] when either argument is not a table.
pub fn intersect(a: &Value, b: &Value) -> Result<Table, TableError> {
    let (a, b) = (expect_table(a)?, expect_table(b)?);
    let mut out = Table::new();
    if a.is_array() && b.is_array() {
        for (_, value) in a.iter() {
            if b.iter().any(|(_, other)| other == value) {
                let next = next_index(&out);
                out.set(Key::Integer(next), value.clone());
            }
        }
    } else {
        for (key, value) in a.iter() {
            if b.get(key) == Some(value) {
                out.set(key.clone(), value.clone());
            }
        }
    }
    Ok(out)
}
