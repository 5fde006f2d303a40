//! Neo Store Web Frontend
//!
//! Leptos-based WASM frontend: a marketing landing page and the demo
//! storefront with the local cart and Razorpay checkout handoff.

mod api;
mod app;
mod components;
mod pages;
mod razorpay;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
