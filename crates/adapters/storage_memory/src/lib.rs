//! # umbra-adapter-storage-memory
//!
//! `HashMap`-backed implementation of the
//! [`PreferenceStore`](umbra_app::ports::PreferenceStore) port. Nothing is
//! durable here — the adapter exists so that tests and headless runs can
//! exercise the application layer without a browser.

use std::cell::RefCell;
use std::collections::HashMap;

use umbra_app::ports::PreferenceStore;
use umbra_domain::error::UmbraError;

/// In-process preference store.
///
/// Interior mutability mirrors the port's `&self` methods; the execution
/// model is single-threaded, so a `RefCell` suffices.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry, as if a previous session had persisted it.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, UmbraError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), UmbraError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
