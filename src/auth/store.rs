//! Durable single-slot persistence of the raw bearer credential.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort. The first backend failure is logged and the
//! store switches to an in-memory shadow slot for the rest of the process, so
//! the session keeps working (it just won't survive a reload). Callers never
//! see a storage error.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::util::storage::{KeyValueStorage, StorageError};

/// One named slot in a [`KeyValueStorage`] holding the current credential.
pub struct CredentialStore<S> {
    backend: S,
    key: String,
    shadow: Option<String>,
    degraded: bool,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    /// Bind the store to `key` inside `backend`.
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            shadow: None,
            degraded: false,
        }
    }

    /// Slot key in the backend.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a backend failure has pinned this store to memory.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Current credential, if any.
    pub fn read(&mut self) -> Option<String> {
        if self.degraded {
            return self.shadow.clone();
        }
        match self.backend.get(&self.key) {
            Ok(value) => {
                self.shadow.clone_from(&value);
                value
            }
            Err(e) => {
                self.degrade("read", &e);
                self.shadow.clone()
            }
        }
    }

    /// Replace the stored credential.
    pub fn write(&mut self, credential: &str) {
        self.shadow = Some(credential.to_owned());
        if self.degraded {
            return;
        }
        if let Err(e) = self.backend.set(&self.key, credential) {
            self.degrade("write", &e);
        }
    }

    /// Empty the slot.
    pub fn clear(&mut self) {
        self.shadow = None;
        if self.degraded {
            return;
        }
        if let Err(e) = self.backend.remove(&self.key) {
            self.degrade("clear", &e);
        }
    }

    fn degrade(&mut self, op: &str, err: &StorageError) {
        log::warn!(
            "credential store {op} failed for slot {:?}: {err}; continuing in memory only",
            self.key
        );
        self.degraded = true;
    }
}
