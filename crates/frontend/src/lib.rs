pub mod app;
pub mod config;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::PageConfig;

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_error) = match PageConfig::from_document(&document) {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    };

    // initializes logging using the `log` crate
    let (level, level_error) = config.effective_log_level();
    _ = console_log::init_with_level(level);

    if let Some(err) = config_error {
        log::warn!("Using default page config: {}", err);
    }
    if let Some(err) = level_error {
        log::warn!("Falling back to info logging: {}", err);
    }

    app::mount(&window, &document, &config);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    shared::dom::on_dom_ready(&document, boot);
}
