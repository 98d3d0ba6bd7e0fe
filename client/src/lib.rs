//! # querysage-client
//!
//! Leptos + WASM frontend for the QuerySage observability assistant.
//!
//! The `state` modules hold the browser-independent controllers (session,
//! metrics polling, CSV ingest, chat, backend actions) behind the `Backend`
//! seam in `net::api`. `pages` and `components` bind them to the view through
//! mirrored signals.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attaches to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already installed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
