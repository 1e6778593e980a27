//! Recoverable errors reported by the [`Registry`](crate::Registry).

use thiserror::Error;

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable registry failures.
///
/// A broken bucket tree invariant is not represented here; it panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No table with this name has been registered or created.
    #[error("no such table: {table}")]
    NoSuchTable {
        /// Requested table name.
        table: String,
    },

    /// The table exists but does not bind the key.
    #[error("key {key:?} not found in table {table}")]
    NotFound {
        /// Table searched.
        table: String,
        /// Missing key.
        key: String,
    },

    /// Another table already occupies the slot this name digests to.
    #[error("registry slot {slot} collision: table {requested} shares a slot with {existing}")]
    RegistrySlotCollision {
        /// Contested slot, `digest(name) mod 256`.
        slot: usize,
        /// Name of the table holding the slot.
        existing: String,
        /// Name that was rejected.
        requested: String,
    },
}
