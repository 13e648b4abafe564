//! # faultline-ui
//!
//! Leptos + WASM client for the Faultline issue-tracking backend.
//!
//! The crate splits into the network layer (`net`: wire types, response
//! envelope normalization, HTTP wrapper), reactive state containers
//! (`state`: auth, installation settings, notifications), the route
//! table and navigation guard (`routes`, `guard`), and the routed views
//! (`app`, `pages`, `components`).

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
