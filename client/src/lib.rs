//! # busline-client
//!
//! Leptos + WASM front end for the bus-ticketing service.
//!
//! Binds the `busline` core to the browser: a reactive bridge over
//! `AuthContext`, a `localStorage` backend for the session, guard components
//! in front of protected routes, and the pages that read and mutate the
//! session.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point; runs when the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
