//! Store Module
//!
//! The keyed-storage capability contract and its in-memory implementation.

mod memory;


pub use memory::MemoryStore;

use crate::error::Result;

// == Store Trait ==
/// Capability contract for keyed storage: get/set/delete by key.
///
/// Callers depend only on this trait, never on a concrete backend. An
/// alternate implementation (e.g. a durable on-disk engine) must preserve
/// the same atomicity and error contract to be substitutable: every
/// operation is atomic with respect to the whole map, and Get/Delete on an
/// absent key is a `NotFound` error, never a silent no-op.
///
/// Values are `String` end-to-end; the HTTP surface only carries strings.
pub trait Store: Send + Sync + 'static {
    /// Returns the exact last-written value for `key`.
    ///
    /// Fails with `KvError::NotFound` when the key is absent.
    fn get(&self, key: &str) -> Result<String>;

    /// Inserts or overwrites `key` unconditionally.
    fn set(&self, key: String, value: String) -> Result<()>;

    /// Removes `key` from the store. No tombstoning: a subsequent Get
    /// observes `NotFound` immediately.
    ///
    /// Fails with `KvError::NotFound` when the key is absent.
    fn delete(&self, key: &str) -> Result<()>;
}
