//! The one structured error in the library.
//!
//! Everything else follows the sentinel-return contract: booleans default to
//! `false`, tables to empty, counts to zero, lookups to
//! [`Value::Absent`](crate::Value::Absent).
use thiserror::Error;

/// Invalid input to a dynamic table operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The operation requires table arguments.
    #[error("expected a table, found {found}")]
    NotATable {
        /// Kind name of the offending value.
        found: &'static str,
    },
}
