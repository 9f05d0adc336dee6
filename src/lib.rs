//! # courtside
//!
//! Leptos + WASM client for the table-tennis training management dashboard.
//!
//! The crate restores the browser-local session, guards each page by role,
//! wraps the REST backend with bearer auth and uniform error handling, and
//! provides toasts, formatting helpers and debounce/throttle wrappers. Browser
//! bindings are compiled with the `csr` feature; native builds use headless
//! stand-ins so the logic runs under `cargo test`.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod context;
pub mod net;
pub mod pages;
pub mod platform;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Entry point called once by the hosting page after the WASM module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
