//! `window.localStorage` store for the browser build.

use super::KeyValueStore;
use crate::error::StorageError;

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Bind to the window's `localStorage`.
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn backend(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{err:?}"))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(backend)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota failures surface here as a `QuotaExceededError` DOMException.
        self.storage.set_item(key, value).map_err(backend)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(backend)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage.clear().map_err(backend)
    }
}
