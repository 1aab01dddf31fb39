use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    // Library crates log through `tracing`, which forwards to `log` here.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("failed to initialize logging: {e}");
    }

    leptos::mount::mount_to_body(App);
}
