//! Name form with greeting, save and reset.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::greeting::GreetingState;
use crate::util::store::LocalStorage;

#[component]
pub fn GreetingForm() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let catalog = config.locale.catalog();
    let form = RwSignal::new(GreetingState::load(&LocalStorage, &config.keys));

    let save_keys = config.keys.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|state| {
            // Rejections are recorded in `state.error` and rendered below.
            let _ = state.save(&LocalStorage, &save_keys);
        });
    };

    let reset_keys = config.keys;
    let on_reset = move |_| form.update(|state| state.reset(&LocalStorage, &reset_keys));

    // Greeting and error are text nodes, so a name like `<b>` shows up
    // literally instead of being parsed.
    view! {
        <section class="greeting">
            <h2 id="greeting" class="greeting__text">
                {move || form.with(|state| state.greeting(catalog))}
            </h2>
            <form class="greeting__form" on:submit=on_save>
                <label class="greeting__label" for="nameInput">
                    {catalog.name_label}
                </label>
                <input
                    id="nameInput"
                    class="greeting__input"
                    type="text"
                    autocomplete="given-name"
                    placeholder=catalog.name_placeholder
                    prop:value=move || form.with(|state| state.input.clone())
                    on:input=move |ev| form.update(|state| state.input = event_target_value(&ev))
                />
                <button id="saveName" class="btn greeting__save" type="submit">
                    {catalog.save_button}
                </button>
                <button id="resetName" class="btn greeting__reset" type="button" on:click=on_reset>
                    {catalog.reset_button}
                </button>
            </form>
            <p id="nameError" class="greeting__error" role="alert" aria-live="polite">
                {move || form.with(|state| state.error_text(catalog))}
            </p>
        </section>
    }
}
