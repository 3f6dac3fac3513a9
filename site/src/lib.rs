//! # site
//!
//! Leptos + WASM frontend for the Rebirth Studio marketing site.
//!
//! One document, five views (home, expertise, work, case study, contact)
//! switched in memory by the root component. All content is compiled in;
//! there is no backend beyond the SSR host in the root crate.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
