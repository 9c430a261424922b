//! Preference store port — durable key-value persistence for user
//! preferences.
//!
//! The backing store is synchronous and blocking (browser `localStorage`,
//! an in-process map, …). Faults are propagated to the caller untouched:
//! no retry, no fallback value, no logging happens at this boundary.

use umbra_domain::error::UmbraError;

/// Durable key-value store for string preferences.
pub trait PreferenceStore {
    /// Read the value stored under `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Propagates a [`UmbraError::Storage`] fault from the backend.
    fn read(&self, key: &str) -> Result<Option<String>, UmbraError>;

    /// Write `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Propagates a [`UmbraError::Storage`] fault from the backend
    /// (quota exceeded, storage disabled, …).
    fn write(&self, key: &str, value: &str) -> Result<(), UmbraError>;
}

// A shared reference to a store is itself a store, so services can borrow
// a longer-lived backend instead of owning it.
impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn read(&self, key: &str) -> Result<Option<String>, UmbraError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), UmbraError> {
        (**self).write(key, value)
    }
}
