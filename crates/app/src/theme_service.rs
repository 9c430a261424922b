//! Theme service — use-cases for the dark-mode preference.
//!
//! Composes the two independent steps (update the observable cell, persist
//! the string form) into the operations the UI consumes. Callers that only
//! want one of the steps use [`ThemeCell`] or the store directly.

use tracing::{debug, trace};

use umbra_domain::error::UmbraError;
use umbra_domain::theme::ThemeMode;

use crate::ports::PreferenceStore;
use crate::theme_cell::ThemeCell;

/// Storage key under which the preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Application service for reading and persisting the theme preference.
///
/// The cell always starts in light mode, even when storage holds `"dark"`
/// from an earlier session; nothing resynchronizes the two automatically.
/// Initialization code that wants them to agree calls
/// [`seed_from_storage`](Self::seed_from_storage) once.
pub struct ThemeService<S> {
    cell: ThemeCell,
    store: S,
}

impl<S: PreferenceStore> ThemeService<S> {
    /// Create a new service backed by the given preference store.
    pub fn new(store: S) -> Self {
        Self {
            cell: ThemeCell::new(),
            store,
        }
    }

    /// The observable cell, for subscribing and reading the current flag.
    #[must_use]
    pub fn cell(&self) -> &ThemeCell {
        &self.cell
    }

    /// Update the in-memory flag, notify subscribers, then persist the
    /// string form (`"dark"`/`"light"`) under [`THEME_KEY`].
    ///
    /// Subscribers run synchronously, before the storage write.
    ///
    /// # Errors
    ///
    /// Propagates the storage fault from the write. The in-memory flag
    /// keeps the new value; no rollback is attempted.
    pub fn set_theme(&self, dark: bool) -> Result<(), UmbraError> {
        let mode = ThemeMode::from_dark(dark);
        debug!(theme = %mode, "setting theme");
        self.cell.set(dark);
        self.store.write(THEME_KEY, mode.as_str())
    }

    /// Read the persisted preference, defaulting to `"light"` when the key
    /// is absent or holds an empty value.
    ///
    /// No validation is performed: a legacy value already present in
    /// storage is returned verbatim. The observable cell is not touched.
    ///
    /// # Errors
    ///
    /// Propagates the storage fault from the read.
    pub fn get_theme(&self) -> Result<String, UmbraError> {
        let stored = self.store.read(THEME_KEY)?;
        trace!(?stored, "read theme preference");
        Ok(stored
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| ThemeMode::Light.to_string()))
    }

    /// Seed the in-memory flag from the persisted preference.
    ///
    /// Maps `"dark"` to `true` and anything else (including the absent-key
    /// default) to `false`, then sets the cell — subscribers are notified
    /// as for any other set. Nothing is written back to storage, and this
    /// is never called implicitly.
    ///
    /// # Errors
    ///
    /// Propagates the storage fault from the read.
    pub fn seed_from_storage(&self) -> Result<(), UmbraError> {
        let dark = self.get_theme()? == ThemeMode::Dark.as_str();
        self.cell.set(dark);
        Ok(())
    }
}
