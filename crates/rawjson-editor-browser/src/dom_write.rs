//! [`EditorNode`] tree → editable surface DOM.
//!
//! Tags are `<span class="function-tag" contenteditable="false">` elements
//! whose `data-*` attributes are the source of truth. Their text is always
//! the label rendered from those attributes.

use rawjson_editor_core::{EditorNode, TagAttrs, render_label};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom_read::{DATA_PREFIX, FUNCTION_TAG_CLASS, read_tag_attrs};
use crate::error::DomError;

/// Create a detached tag element for `attrs`.
pub fn create_function_tag(document: &Document, attrs: &TagAttrs) -> Result<HtmlElement, DomError> {
    let tag: HtmlElement = document
        .create_element("span")?
        .dyn_into()
        .map_err(JsValue::from)?;
    tag.set_class_name(FUNCTION_TAG_CLASS);
    tag.set_content_editable("false");
    write_attrs(&tag, attrs)?;
    Ok(tag)
}

/// Replace the tag's `data-*` attributes with `attrs` and refresh its label.
pub fn write_attrs(tag: &Element, attrs: &TagAttrs) -> Result<(), DomError> {
    let stale: Vec<String> = tag
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter(|name| name.starts_with(DATA_PREFIX))
        .collect();
    for name in stale {
        tag.remove_attribute(&name)?;
    }

    for (key, value) in attrs.to_bag() {
        tag.set_attribute(&format!("{DATA_PREFIX}{key}"), &value)?;
    }
    refresh_label(tag);
    Ok(())
}

/// Recompute the visible label from the element's current attributes.
pub fn refresh_label(tag: &Element) {
    let label = render_label(&read_tag_attrs(tag));
    tag.set_text_content(Some(&label));
}

/// Clear `surface` and materialize `nodes` into it.
///
/// Returns the created tag elements, in document order, so the caller can
/// attach click handlers.
pub fn rebuild_surface(surface: &Element, nodes: &[EditorNode]) -> Result<Vec<HtmlElement>, DomError> {
    let document = surface.owner_document().ok_or(DomError::NoDocument)?;
    surface.set_inner_html("");

    let mut tags = Vec::new();
    append_nodes(&document, surface, nodes, &mut tags)?;
    tracing::debug!(nodes = nodes.len(), tags = tags.len(), "rebuilt editor surface");
    Ok(tags)
}

fn append_nodes(
    document: &Document,
    parent: &Node,
    nodes: &[EditorNode],
    tags: &mut Vec<HtmlElement>,
) -> Result<(), DomError> {
    for node in nodes {
        match node {
            EditorNode::Text(text) => {
                parent.append_child(&document.create_text_node(text))?;
            }
            EditorNode::Tag(attrs) => {
                let tag = create_function_tag(document, attrs)?;
                parent.append_child(&tag)?;
                tags.push(tag);
            }
            EditorNode::Block(children) => {
                let block = document.create_element("div")?;
                append_nodes(document, &block, children, tags)?;
                parent.append_child(&block)?;
            }
            EditorNode::Container(children) => append_nodes(document, parent, children, tags)?,
        }
    }
    Ok(())
}
