//! Durable string key-value stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! `KeyValueStore` is the `localStorage` shape: string keys, string values,
//! no schema. `Storage` layers JSON encoding and fallbacks on top.

pub mod file;
pub mod memory;

#[cfg(feature = "hydrate")]
pub mod local;

pub use file::FileStore;
pub use memory::MemoryStore;

#[cfg(feature = "hydrate")]
pub use local::LocalStore;

use crate::error::StorageError;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}
