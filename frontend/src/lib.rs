//! Folio browser entry point.

use app::App;
use folio_core::Config;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Site metadata, embedded at compile time.
const SITE_CONFIG: &str = include_str!("../../site.toml");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let config = match Config::from_toml_str(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid site.toml: {e}");
            return;
        }
    };

    log::info!("mounting {}", config.user.title);
    mount_to_body(move || view! { <App config=config /> });
}
