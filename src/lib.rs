#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod desktop;
pub mod era;
pub mod particles;
pub mod preferences;
pub mod projects;
pub mod scroll;
#[cfg(feature = "ssr")]
pub mod server;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
