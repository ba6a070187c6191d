#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod logging;
pub mod paths;
pub mod source;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    // Sync <html lang> with the saved locale before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
