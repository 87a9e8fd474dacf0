#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
#[cfg(feature = "ssr")]
pub mod contact;
pub mod content;
pub mod intake;
#[cfg(feature = "ssr")]
pub mod markdown;
pub mod motion;
#[cfg(feature = "rss")]
pub mod rss;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
