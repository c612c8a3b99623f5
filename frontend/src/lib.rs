pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting Employee Leave Management frontend");

    // Resolve the API base URL early; requests fall back to the default until it lands.
    leptos::spawn_local(config::init());
    router::mount_app();
}
