//! Animated single-page portfolio, client-side rendered with Leptos.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state`, `motion`, `net`, and `util` hold the browser-agnostic logic and
//! are tested natively; `components`, `app`, and `driver` wire them into the
//! DOM. The `csr` feature adds the wasm entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod driver;
pub mod motion;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger not installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
