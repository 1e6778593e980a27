//! Fixed-capacity directory of named tables.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::digest::{BUCKETS, Crc32, Digest, bucket_of};
use crate::error::{Error, Result};
use crate::node::Hit;
use crate::ops::insert::Put;
use crate::table::Table;

/// Outcome of [`Registry::register_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The slot was empty; a new table now holds it.
    Created,
    /// A table of the same name already held the slot.
    Existing,
}

/// Up to 256 tables, each stored at `digest(name) mod 256`.
///
/// The first name to claim a slot keeps it. A later, different name landing
/// on the same slot is rejected with [`Error::RegistrySlotCollision`]; the
/// occupant and its entries are never touched.
pub struct Registry<V, D = Crc32> {
    digest: D,
    slots: Box<[Option<Table<V, D>>]>,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<V> Registry<V> {
    /// Creates an empty registry digesting with CRC-32.
    #[must_use]
    pub fn new() -> Self {
        Self::with_digest(Crc32)
    }
}

impl<V, D> Registry<V, D> {
    /// Creates an empty registry; `digest` is shared by every table it
    /// creates, for both table names and keys.
    #[must_use]
    pub fn with_digest(digest: D) -> Self {
        Self {
            digest,
            slots: (0..BUCKETS).map(|_| None).collect(),
            size: 0,
        }
    }

    /// Returns the number of registered tables.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no table has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterates registered tables in slot order.
    pub fn tables(&self) -> impl Iterator<Item = &Table<V, D>> {
        self.slots.iter().flatten()
    }
}

// ---------------------------------------------------------------------------
// Read operations — D: Digest
// ---------------------------------------------------------------------------

impl<V, D: Digest> Registry<V, D> {
    fn slot_of(&self, name: &str) -> usize {
        bucket_of(self.digest.digest(name.as_bytes()))
    }

    /// Returns the table called `name`.
    ///
    /// A different table occupying `name`'s slot does not count.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&Table<V, D>> {
        self.slots[self.slot_of(name)]
            .as_ref()
            .filter(|table| table.name() == name)
    }

    /// Mutable counterpart of [`table`](Self::table).
    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table<V, D>> {
        let slot = self.slot_of(name);
        self.slots[slot]
            .as_mut()
            .filter(|table| table.name() == name)
    }

    /// Looks up `key` in `table`, reporting whether the hit came from a
    /// collision chain.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchTable`] if `table` was never created,
    /// [`Error::NotFound`] if it does not bind `key`.
    pub fn lookup(&self, table: &str, key: &str) -> Result<Hit<'_, V>> {
        let source = self.table(table).ok_or_else(|| {
            trace!(table, "lookup against unregistered table");
            Error::NoSuchTable {
                table: table.to_owned(),
            }
        })?;
        source.lookup(key).ok_or_else(|| {
            trace!(table, key, "key not found");
            Error::NotFound {
                table: table.to_owned(),
                key: key.to_owned(),
            }
        })
    }

    /// Returns the value bound to `key` in `table`.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup).
    pub fn get(&self, table: &str, key: &str) -> Result<&V> {
        self.lookup(table, key).map(|hit| hit.value())
    }
}

// ---------------------------------------------------------------------------
// Write operations — D: Digest + Clone
// ---------------------------------------------------------------------------

impl<V, D: Digest + Clone> Registry<V, D> {
    /// Registers a table called `name`. Idempotent for the same name.
    ///
    /// # Errors
    ///
    /// [`Error::RegistrySlotCollision`] if a different name holds the slot.
    pub fn register_table(&mut self, name: &str) -> Result<Registration> {
        let slot = self.slot_of(name);
        if let Some(existing) = &self.slots[slot] {
            if existing.name() == name {
                debug!(table = name, slot, "table already registered");
                return Ok(Registration::Existing);
            }
            return Err(slot_collision(slot, existing.name(), name));
        }
        self.slots[slot] = Some(Table::with_digest(name, self.digest.clone()));
        self.size += 1;
        debug!(table = name, slot, "table created");
        Ok(Registration::Created)
    }

    /// Returns the table called `name`, creating it if its slot is free.
    ///
    /// # Errors
    ///
    /// [`Error::RegistrySlotCollision`] if a different name holds the slot.
    pub fn get_or_create(&mut self, name: &str) -> Result<&mut Table<V, D>> {
        let slot = self.slot_of(name);
        if let Some(existing) = &self.slots[slot] {
            if existing.name() != name {
                return Err(slot_collision(slot, existing.name(), name));
            }
        } else {
            debug!(table = name, slot, "no such table, creating");
            self.size += 1;
        }
        let digest = &self.digest;
        Ok(self.slots[slot].get_or_insert_with(|| Table::with_digest(name, digest.clone())))
    }

    /// Binds `key` to `value` in `table`, creating the table on demand.
    ///
    /// # Errors
    ///
    /// [`Error::RegistrySlotCollision`] if `table` cannot be created.
    ///
    /// # Panics
    ///
    /// Panics if the bucket tree's placement invariant is found broken.
    pub fn put(&mut self, table: &str, key: &str, value: V) -> Result<Put> {
        Ok(self.get_or_create(table)?.insert(key, value))
    }
}

impl<V: Default, D: Digest + Clone> Registry<V, D> {
    /// Declares `key` in `table` with a default value, creating the table
    /// on demand. An existing binding is left as is.
    ///
    /// Returns `true` if the key was new.
    ///
    /// # Errors
    ///
    /// [`Error::RegistrySlotCollision`] if `table` cannot be created.
    pub fn declare(&mut self, table: &str, key: &str) -> Result<bool> {
        Ok(self.get_or_create(table)?.declare(key))
    }
}

fn slot_collision(slot: usize, existing: &str, requested: &str) -> Error {
    warn!(slot, existing, requested, "registry slot collision");
    Error::RegistrySlotCollision {
        slot,
        existing: existing.to_owned(),
        requested: requested.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D> fmt::Debug for Registry<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("tables", &self.size)
            .finish_non_exhaustive()
    }
}
