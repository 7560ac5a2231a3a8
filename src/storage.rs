//! JSON storage over a `KeyValueStore`.
//!
//! DESIGN
//! ======
//! Callers get plain values back, never errors: failures are logged and turned
//! into `false` / the caller's default. `try_set` and `try_get` keep the error
//! for the few callers that need to tell "absent" from "broken".

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::error::StorageError;
use crate::store::KeyValueStore;

#[derive(Clone)]
pub struct Storage {
    store: Rc<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Encode `value` as JSON and store it under `key`. Returns `false` on failure.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, key, "storage set failed");
                false
            }
        }
    }

    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(StorageError::Encode)?;
        self.store.set_item(key, &raw)
    }

    /// Decoded value for `key`, or `default` when absent or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_opt(key).unwrap_or(default)
    }

    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, key, "storage get failed");
                None
            }
        }
    }

    /// `Ok(None)` for an absent or empty entry.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode { key: key.to_owned(), source })
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            warn!(error = %e, key, "storage remove failed");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "storage clear failed");
        }
    }
}
