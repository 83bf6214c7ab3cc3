pub mod app;
pub mod dashboards;
pub mod layout;
pub mod routes;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::load_config_or_default;
use shared::storage::default_storage;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let storage = default_storage();
    let config = load_config_or_default(storage.as_ref());

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    log::info!("{} starting (log level {})", config.app.title, config.log_level());

    leptos::mount::mount_to_body(move || view! { <App storage=storage config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
