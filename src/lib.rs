//! # code-merlin
//!
//! Leptos + WASM landing page for Code Merlin.
//!
//! The page has three independent interactive features, each persisted to
//! `localStorage`: a light/dark theme toggle, a name greeting form and a
//! dismissible banner. Their logic lives in `state` as plain controllers over
//! the storage and document seams in `util`, so everything except the
//! component wiring is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
