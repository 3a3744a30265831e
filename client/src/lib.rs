//! # client
//!
//! Leptos + WASM frontend for the robotic assets directory.
//!
//! This crate contains the catalog and asset detail pages, their view state,
//! the detail wire types and the HTTP client for the asset API. It is built
//! with `hydrate` for the browser and with `ssr` for the host server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
