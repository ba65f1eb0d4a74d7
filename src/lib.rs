//! Admin controls for the blog article page.
//!
//! Compiled to WebAssembly and loaded on the server-rendered article view.
//! On start it reads the article metadata from the DOM and wires the
//! delete / change-status buttons to the blog API.

pub mod actions;
pub mod api;
pub mod article;
pub mod page;
pub mod utils;

pub use article::ArticleContext;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no window / document available"))?;

    page::bootstrap_when_ready(&document);
    Ok(())
}
