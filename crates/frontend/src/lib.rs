pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::load_config;

#[wasm_bindgen(start)]
pub fn start() {
    let (config, config_error) = load_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }

    app::run_when_ready(config);
}
