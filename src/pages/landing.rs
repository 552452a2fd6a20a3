//! Code Merlin landing page.

use leptos::prelude::*;

use crate::components::greeting_form::GreetingForm;
use crate::components::info_banner::InfoBanner;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::PageConfig;

#[component]
pub fn LandingPage() -> impl IntoView {
    let catalog = expect_context::<PageConfig>().locale.catalog();

    view! {
        <div class="landing-page">
            <header class="landing-page__header">
                <span class="landing-page__brand">{catalog.heading}</span>
                <span class="landing-page__spacer"></span>
                <ThemeToggle/>
            </header>
            <InfoBanner/>
            <main class="landing-page__main">
                <h1 class="landing-page__heading">{catalog.heading}</h1>
                <p class="landing-page__tagline">{catalog.tagline}</p>
                <GreetingForm/>
            </main>
        </div>
    }
}
