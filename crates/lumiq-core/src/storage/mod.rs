//! Durable key-value storage for preferences.
//!
//! The preference store only needs string keys and string values. Backends
//! implement [`KeyValueStore`]; every method reports failure through
//! [`Result`](crate::Result) and leaves recovery to the caller.
//!
//! - [`MemoryStore`]: in-process map with optional quota and a disabled mode
//! - [`FileStore`]: JSON document on disk, rewritten on every write

mod file;
mod memory;

pub use file::{FileStore, StoreDocument};
pub use memory::MemoryStore;

use crate::error::Result;

/// A string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
