//! # umbra-adapter-storage-web
//!
//! Browser `localStorage` implementation of the
//! [`PreferenceStore`](umbra_app::ports::PreferenceStore) port.
//!
//! `localStorage` is origin-scoped, synchronous, and survives page reloads.
//! Faults (storage disabled, quota exceeded) surface as
//! [`UmbraError::Storage`] and are propagated to the caller untouched.

use umbra_app::ports::PreferenceStore;
use umbra_domain::error::{StorageError, UmbraError};
use wasm_bindgen::JsValue;

/// Preference store backed by `window.localStorage`.
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// Acquire the current window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`UmbraError::Storage`] when there is no window object or
    /// the browser denies storage access (private mode, disabled storage).
    pub fn from_window() -> Result<Self, UmbraError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::new("no window object"))?;
        let storage = window
            .local_storage()
            .map_err(js_fault)?
            .ok_or_else(|| StorageError::new("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for WebStorage {
    fn read(&self, key: &str) -> Result<Option<String>, UmbraError> {
        self.storage.get_item(key).map_err(js_fault)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), UmbraError> {
        self.storage.set_item(key, value).map_err(js_fault)
    }
}

fn js_fault(err: JsValue) -> UmbraError {
    StorageError::new(format!("{err:?}")).into()
}
