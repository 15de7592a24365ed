//! # hiresight-web
//!
//! Leptos + WASM client for the HireSight recruiting platform.
//!
//! The crate is split into a platform-independent core (`net`, `state`,
//! `forms`) that owns the auth session lifecycle and form validation, and a
//! thin presentation layer (`pages`, `components`) that renders it. The
//! browser build is enabled with the `csr` feature; without it the core
//! compiles natively with in-memory storage and an offline transport so it
//! can be unit-tested.

pub mod app;
pub mod components;
pub mod forms;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
