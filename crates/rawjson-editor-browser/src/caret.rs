//! Caret-relative insertion into the editable surface.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement, Node, Range, Selection};

use crate::error::DomError;

const NBSP: &str = "\u{a0}";

/// Insert `node` at the caret, followed by a non-breaking space, and leave
/// the caret after that space.
///
/// A caret outside `surface` (or no caret at all) inserts at the end.
pub fn insert_node_at_caret(surface: &HtmlElement, node: &Node) -> Result<(), DomError> {
    surface.focus()?;
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let selection = window
        .get_selection()?
        .ok_or_else(|| DomError::Js("no selection object".into()))?;

    let range = caret_range(&selection, surface, &document)?;
    range.delete_contents()?;
    range.insert_node(node)?;

    let space = document.create_text_node(NBSP);
    range.set_start_after(node)?;
    range.insert_node(&space)?;
    range.set_start_after(&space)?;
    range.collapse_with_to_start(true);

    selection.remove_all_ranges()?;
    selection.add_range(&range)?;
    Ok(())
}

fn caret_range(
    selection: &Selection,
    surface: &HtmlElement,
    document: &web_sys::Document,
) -> Result<Range, DomError> {
    if selection.range_count() > 0 {
        let range = selection.get_range_at(0)?;
        if surface.contains(Some(&range.common_ancestor_container()?)) {
            return Ok(range);
        }
    }
    tracing::trace!("caret outside editor, inserting at end");
    let range = document.create_range()?;
    range.select_node_contents(surface)?;
    range.collapse_with_to_start(false);
    Ok(range)
}

/// Insert plain text at the caret through the browser's own editing path,
/// so it joins the native undo stack.
pub fn insert_text_at_caret(text: &str) -> Result<(), DomError> {
    let document: HtmlDocument = crate::document()?
        .dyn_into()
        .map_err(|_| DomError::NoDocument)?;
    if !document.exec_command_with_show_ui_and_value("insertText", false, text)? {
        tracing::debug!("insertText command was not handled");
    }
    Ok(())
}
