//! Browser DOM layer for the rawjson editor.
//!
//! Thin adapter between a content-editable element and the DOM-free core.
//! It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom_read`: editable surface → `EditorNode` tree
//! - `dom_write`: `EditorNode` tree → DOM, tag element factory
//! - `caret`: insertion at the caret
//! - `clipboard`: plain-text paste, copying output
//! - `preview`: preview span rendering
//! - `modal`: `ModalPresenter` over DOM containers
//! - `catalog`: item/slot catalog fetching
//!
//! # Re-exports
//!
//! This crate re-exports `rawjson-editor-core` for convenience, so consumers
//! only need to depend on `rawjson-editor-browser`.

pub use rawjson_editor_core;
pub use rawjson_editor_core::*;

pub mod caret;
pub mod catalog;
pub mod clipboard;
pub mod dom_read;
pub mod dom_write;
pub mod error;
pub mod modal;
pub mod preview;

pub use caret::{insert_node_at_caret, insert_text_at_caret};
pub use catalog::{fetch_catalog, fetch_catalog_or_empty, load_catalogs};
pub use clipboard::{paste_plain_text, write_clipboard_text};
pub use dom_read::{FUNCTION_TAG_CLASS, is_function_tag, read_attribute_bag, read_tag_attrs, read_tree};
pub use dom_write::{create_function_tag, rebuild_surface, refresh_label, write_attrs};
pub use error::{CatalogError, DomError};
pub use modal::DomModalStack;
pub use preview::render_preview_into;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// The global document.
pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Look up an HTML element by id.
pub fn html_element_by_id(id: &str) -> Result<HtmlElement, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into()
        .map_err(|_| DomError::NotHtml(id.to_string()))
}
