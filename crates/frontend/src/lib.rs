pub mod app;
pub mod app_shell;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    log::info!("Asset console v{} starting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(app::App);
}
