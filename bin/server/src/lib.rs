//! Mosque directory web server and UI.
//!
//! This crate provides the Leptos-based page that renders a single mosque
//! record fetched from the content API.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod server_helpers;
#[cfg(feature = "ssr")]
pub mod state;
pub mod types;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
