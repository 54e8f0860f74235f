//! # saveddit
//!
//! Leptos + WASM frontend for Saveddit: account creation, login, and linking
//! a Reddit account behind an authenticated session.
//!
//! The session core (`state`, `util::auth`, `net::initiators`) is plain Rust
//! and runs in native tests; `app`, `components` and `pages` are the Leptos
//! views on top of it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
