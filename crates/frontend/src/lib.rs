pub mod app;
pub mod shared;
pub mod usecases;

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_pdf_qa::PdfQa;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("{} mounted, api at {}", PdfQa::full_name(), shared::api_utils::api_base());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
