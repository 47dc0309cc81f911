//! # helpdesk-client
//!
//! Leptos + WASM frontend for the helpdesk ticketing service.
//!
//! The crate's core is the session and access-control layer in `auth`:
//! bearer credential decoding, single-slot credential persistence, the
//! session manager that keeps storage, memory, and the request header in
//! step, the route guard, and the role menu. `net` holds the shared request
//! channel and auth endpoints; `pages` and `components` are the thin UI
//! around them.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
