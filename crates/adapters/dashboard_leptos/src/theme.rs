//! Theme context — the reactive dark-mode flag wired to `localStorage`.
//!
//! Provided once at the root of the component tree; any component can grab
//! it from context to read the flag reactively or flip it. Persistence and
//! the `data-theme` DOM attribute are updated on every set; a storage
//! fault leaves the in-memory flag in place (no rollback).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use umbra_adapter_storage_web::WebStorage;
use umbra_app::ports::PreferenceStore;
use umbra_app::theme_service::THEME_KEY;
use umbra_domain::theme::ThemeMode;

/// Reactive theme flag shared through the Leptos context.
///
/// The signal seeds from the persisted preference at construction, so the
/// page comes back in the mode the user last chose.
#[derive(Clone, Copy)]
pub struct Theme {
    is_dark: RwSignal<bool>,
}

impl Theme {
    /// Read the persisted preference, apply it to the document, and build
    /// the reactive flag around it.
    #[must_use]
    pub fn init() -> Self {
        let initial = stored_theme();
        apply_theme(initial);
        Self {
            is_dark: RwSignal::new(initial.is_dark()),
        }
    }

    /// Whether dark mode is on. Reactive when called inside a tracking
    /// scope.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    /// Flip the flag, persisting and applying the new mode.
    pub fn toggle(&self) {
        self.set(!self.is_dark.get_untracked());
    }

    /// Set the flag, apply the `data-theme` attribute, and persist the
    /// string form under the shared storage key.
    pub fn set(&self, dark: bool) {
        let mode = ThemeMode::from_dark(dark);
        apply_theme(mode);
        save_theme(mode);
        self.is_dark.set(dark);
    }
}

/// Read the stored theme, defaulting to light when the key is absent or
/// holds something unrecognized.
fn stored_theme() -> ThemeMode {
    WebStorage::from_window()
        .ok()
        .and_then(|store| store.read(THEME_KEY).ok().flatten())
        .map(|value| value.parse().unwrap_or_default())
        .unwrap_or_default()
}

/// Apply the theme by setting the `data-theme` attribute on `<html>`.
fn apply_theme(mode: ThemeMode) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        if let Some(el) = doc.document_element() {
            let html = el.unchecked_into::<web_sys::HtmlElement>();
            let _ = html.dataset().set("theme", mode.as_str());
        }
    }
}

/// Persist the theme choice. A fault here is deliberately dropped: the UI
/// keeps the in-memory mode and the next successful set overwrites the key.
fn save_theme(mode: ThemeMode) {
    if let Ok(store) = WebStorage::from_window() {
        let _ = store.write(THEME_KEY, mode.as_str());
    }
}
