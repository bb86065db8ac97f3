//! # signup-client
//!
//! Leptos + WASM view for the sign-up form.
//!
//! Pages bind inputs to a shared `RwSignal<SignupState>` and route every
//! change through the core reducer. Network calls and `localStorage` access
//! only happen under the `hydrate` feature; SSR renders the static form.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger may already be installed; logging never gates hydration.
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
