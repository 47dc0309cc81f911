//! Key/value persistence backends for browser-resident state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` is the durable medium in the browser. Everything above this
//! module talks to the `KeyValueStorage` trait so native tests can
//! swap in `MemoryStorage` without touching session logic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Failure reported by a persistence backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage medium exists in this runtime (native build, private mode, no window).
    #[error("storage unavailable")]
    Unavailable,
    /// The medium exists but refused the operation (quota, security policy).
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// Minimal durable key/value medium.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be reached or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Window `localStorage`, scoped to the browser profile.
///
/// The handle is looked up on every call so the type stays `Send + Sync`
/// and can live inside shared context.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Rejected(js_error_message(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(js_error_message(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(js_error_message(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local storage. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.lock().insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
