//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::theme::Theme;

/// A toggle button that switches between light and dark themes.
///
/// Reads the shared [`Theme`] from context; each click toggles the mode
/// and persists the new preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<Theme>();

    let label = move || {
        if theme.is_dark() {
            "\u{263E}"
        } else {
            "\u{2600}"
        }
    };

    view! {
        <button class="theme-toggle" on:click=move |_| theme.toggle() title="Toggle theme">
            {label}
        </button>
    }
}
