//! # shelfdesk-client
//!
//! Leptos + WASM admin shell for the library API. Owns the browser side of
//! the session lifecycle: `localStorage`-backed session store, the session
//! watcher mounted once in the shell, and the guard around protected routes.
//! The lifecycle rules themselves live in the `shelfdesk` core crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
