pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod models;
pub mod rating;
pub mod remote;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    utils::panic_hook::init();

    leptos::mount_to_body(App);
}
