//! # client
//!
//! Leptos + WASM frontend for DiabetesPredict.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the external risk API. Domain types and validation come from
//! the shared `assessments` crate.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
