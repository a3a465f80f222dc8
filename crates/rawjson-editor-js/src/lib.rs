//! WASM bindings for the Bedrock rawjson editor.
//!
//! `JsEditor` drives the editable surface, output and preview. The free
//! functions in `grammar` back the selector, hasitem, scores and condition
//! forms, which are rendered by the JS view layer.

mod editor;
mod grammar;
mod types;

pub use editor::*;
pub use grammar::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A second init (e.g. hot reload) keeps the first subscriber.
    if let Err(e) = set_global_default(Registry::default().with(wasm_layer)) {
        web_sys::console::warn_1(&format!("tracing subscriber already set: {e}").into());
    }
}
