//! Theme preference persistence over a key-value store.
//!
//! The browser backing is `window.localStorage`; tests and storage-less
//! environments use [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Storage can be missing (no window, privacy mode) or refuse writes (quota).
//! Neither is worth surfacing: the store logs at debug level and behaves as if
//! nothing was persisted, so the page falls back to the default light theme.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::state::theme::ThemePreference;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// Minimal synchronous string key-value store.
pub trait KeyValueStore {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Survives for the lifetime of the value only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`, scoped to the page origin.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Acquire the page's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when there is no window or the
    /// browser denies storage access.
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

fn rejected(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected(format!("{err:?}"))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| rejected(&e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| rejected(&e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(|e| rejected(&e))
    }
}

/// Reads and writes the single theme flag.
pub struct PreferenceStore<S> {
    store: Option<S>,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store: Some(store), key: key.into() }
    }

    /// A store with no backing at all; every read is `None`, writes vanish.
    pub fn detached(key: impl Into<String>) -> Self {
        Self { store: None, key: key.into() }
    }

    /// The persisted preference, or `None` for the default.
    pub fn get(&self) -> Option<ThemePreference> {
        let store = self.store.as_ref()?;
        match store.get_item(&self.key) {
            Ok(Some(tag)) => ThemePreference::from_tag(&tag),
            Ok(None) => None,
            Err(err) => {
                log::debug!("theme preference read skipped: {err}");
                None
            }
        }
    }

    pub fn set(&self, pref: ThemePreference) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        if let Err(err) = store.set_item(&self.key, pref.tag()) {
            log::debug!("theme preference not persisted: {err}");
        }
    }

    pub fn clear(&self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        if let Err(err) = store.remove_item(&self.key) {
            log::debug!("theme preference not cleared: {err}");
        }
    }
}

impl PreferenceStore<BrowserStorage> {
    /// Store backed by `localStorage`, or detached when it is unavailable.
    pub fn browser(key: impl Into<String>) -> Self {
        match BrowserStorage::local() {
            Ok(storage) => Self::new(storage, key),
            Err(err) => {
                log::debug!("theme preference falls back to session default: {err}");
                Self::detached(key)
            }
        }
    }
}
