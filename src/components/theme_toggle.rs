//! Theme toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::theme::{self, Theme};
use crate::util::dom::BrowserRoot;
use crate::util::media::prefers_dark_scheme;
use crate::util::store::LocalStorage;

/// Icon for the button: the theme a click switches to.
fn toggle_glyph(current: Theme) -> &'static str {
    match current {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

/// Button flipping between light and dark themes.
///
/// The signal only drives the label and icon; the applied theme itself is
/// re-read from the root attribute on every click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let catalog = config.locale.catalog();
    let keys = config.keys;
    let applied = RwSignal::new(theme::init(&LocalStorage, &BrowserRoot, &keys, prefers_dark_scheme));

    let on_toggle = move |_| applied.set(theme::toggle(&LocalStorage, &BrowserRoot, &keys));

    view! {
        <button
            id="themeToggle"
            class="btn theme-toggle"
            type="button"
            aria-label=move || catalog.theme_toggle_label(applied.get())
            title=move || catalog.theme_toggle_label(applied.get())
            on:click=on_toggle
        >
            {move || toggle_glyph(applied.get())}
        </button>
    }
}
