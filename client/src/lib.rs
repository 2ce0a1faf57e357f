//! # fitness-client
//!
//! Leptos + WASM front-end for the fitness tracker: OAuth2 PKCE login,
//! activity recording, the activity list, and per-activity recommendations.
//!
//! The crate is compiled twice: with `hydrate` into the browser bundle and
//! with `ssr` into the host server, which renders the same `App` shell.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
