use leptos::prelude::*;

mod components;
pub mod theme;

use components::ThemeToggle;
use theme::Theme;

/// Root application component.
///
/// Builds the [`Theme`] context from the persisted preference and exposes
/// it to the whole tree.
#[component]
pub fn App() -> impl IntoView {
    provide_context(Theme::init());

    view! {
        <nav>
            <ThemeToggle/>
        </nav>
        <main>
            <h1>"umbra"</h1>
        </main>
    }
}
