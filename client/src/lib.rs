//! # client
//!
//! Leptos + WASM login front end for `logingate`.
//!
//! Renders the two-field login card, drives the debounced form gate with a
//! browser timeout, and shares the persisted session flag with every
//! component through context. Build with `--features csr` (e.g. via Trunk)
//! for the browser; without it, browser glue compiles to no-ops so the
//! crate can be unit tested natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
