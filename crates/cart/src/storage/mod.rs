//! Durable key/value storage backends for the cart snapshot.
//!
//! The cart persists a single serialized value under one key. Anything that
//! can hold a string per key can back it:
//!
//! - [`MemoryStore`] - process-local map, used by tests and previews
//! - [`FileStore`] - one file per key under a directory, used by the CLI

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by storage backends.
///
/// The cart store never surfaces these to its callers; they are logged and
/// the cart degrades to empty (on read) or unchanged (on write).
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be mapped onto the backing medium.
    #[error("Invalid storage key {0:?}")]
    InvalidKey(String),

    /// A writer panicked while holding the store's lock.
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// A string-valued key/value store.
///
/// Mirrors the browser's local storage: values are opaque strings, `set`
/// overwrites, and a missing key reads as `None`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
