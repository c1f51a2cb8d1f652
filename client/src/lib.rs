//! # client
//!
//! Leptos front end for the booking service: auth screens, the client-side
//! session lifecycle (bootstrap, refresh-on-401, route guards) and page
//! chrome, all routed under a locale prefix.
//!
//! Screen logic lives in `flows` as plain state machines so it can be tested
//! without a browser; `pages` and `components` only bind them to the DOM.

pub mod app;
pub mod components;
pub mod flows;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
