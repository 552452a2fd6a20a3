//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::PageConfig;
use crate::i18n;
use crate::pages::landing::LandingPage;
use crate::util::dom::BrowserRoot;

/// Root application component.
///
/// Resolves the page configuration once and provides it to every component
/// through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PageConfig::from_build_env();
    i18n::apply_lang(&BrowserRoot, config.locale);
    let title = config.locale.catalog().page_title;
    provide_context(config);

    view! {
        <Title text=title/>
        <LandingPage/>
    }
}
