//! PHP-style table, string, file, and shell convenience helpers.
//!
//! The core of the crate is the [`Table`] container: an insertion-ordered
//! sequence of [`Key`]/[`Value`] entries that every algorithm first
//! classifies as either a dense array (key set exactly `1..=n`) or an
//! ordinary mapping, picking ordered or unordered semantics accordingly.
//! Around it sit the [`StringBuffer`] amortized text accumulator, the
//! [`Properties`] file codec, and thin [`fs`] and [`shell`] collaborators.
//!
//! Operations never raise on unexpected input: booleans degrade to `false`,
//! tables to empty, lookups to [`Value::Absent`]. The one structured error
//! is [`TableError`], returned by the dynamic [`combine`] and [`intersect`]
//! entry points when handed a non-table.
//!
//! ```
//! use tabula::{table, Order};
//!
//! let mut t = table![5, 3, 1, 4, 2];
//! t.sort(Order::Ascending);
//! assert!(t.equals(&table![1, 2, 3, 4, 5]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod sort;
mod strbuf;
mod table;
mod value;

#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "props")]
mod props;
#[cfg(feature = "shell")]
pub mod shell;

#[cfg(test)]
mod tests;

pub use error::TableError;
#[cfg(feature = "props")]
pub use props::Properties;
pub use sort::Order;
pub use strbuf::StringBuffer;
pub use table::{Table, combine, count, equals, flip, intersect, is_array, keys, reverse, values};
pub use value::{Key, Value};
