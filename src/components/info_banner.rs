//! Dismissible informational banner.

#[cfg(test)]
#[path = "info_banner_test.rs"]
mod info_banner_test;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::banner::BannerState;
use crate::util::dom::BrowserRoot;
use crate::util::store::LocalStorage;

/// Inline `display` value; empty leaves the stylesheet in charge.
fn display_style(state: BannerState) -> &'static str {
    if state.visible() { "" } else { "none" }
}

/// Banner that stays in the document when dismissed and is hidden inline.
#[component]
pub fn InfoBanner() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let catalog = config.locale.catalog();
    let keys = config.keys;
    let banner = RwSignal::new(BannerState::load(&LocalStorage, &BrowserRoot, &keys));

    let on_close = move |_| banner.update(|state| state.dismiss(&LocalStorage, &BrowserRoot, &keys));

    view! {
        <div
            id="infoBanner"
            class="info-banner"
            role="status"
            style:display=move || display_style(banner.get())
            aria-hidden=move || if banner.get().visible() { "false" } else { "true" }
        >
            <p class="info-banner__text">{catalog.banner_text}</p>
            <button
                id="closeBanner"
                class="btn info-banner__close"
                type="button"
                aria-label=catalog.banner_close_label
                on:click=on_close
            >
                "×"
            </button>
        </div>
    }
}
