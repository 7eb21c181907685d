//! # client-rust
//!
//! Leptos + WASM front end for the branch control panel. Replaces the three
//! copy-pasted dashboard scripts with one UI layer over the shared
//! `dispatchboard` contract crate.
//!
//! Two routed pages: the admin dashboard (branch cards, gated actions, call
//! recordings) and the standalone console (configurable API base URL,
//! service status, emergency trigger, debug firehose, timeline).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
