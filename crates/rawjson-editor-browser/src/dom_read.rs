//! Editable surface DOM → [`EditorNode`] tree.
//!
//! Function tags are recognized by class and read from their `data-*`
//! attributes; `DIV` and `P` become blocks; any other element is a
//! transparent container. Comments and other node types are ignored.

use rawjson_editor_core::{AttributeBag, EditorNode, TagAttrs};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

/// Class carried by every functional tag element.
pub const FUNCTION_TAG_CLASS: &str = "function-tag";

pub(crate) const DATA_PREFIX: &str = "data-";

/// Read all children of `root` into the intermediate tree.
pub fn read_tree(root: &Node) -> Vec<EditorNode> {
    let nodes = read_children(root);
    tracing::trace!(nodes = nodes.len(), "read editor tree");
    nodes
}

fn read_children(node: &Node) -> Vec<EditorNode> {
    let children = node.child_nodes();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|child| read_node(&child))
        .collect()
}

/// Classify a single DOM node.
pub fn read_node(node: &Node) -> Option<EditorNode> {
    match node.node_type() {
        Node::TEXT_NODE => Some(EditorNode::Text(node.text_content().unwrap_or_default())),
        Node::ELEMENT_NODE => {
            let element = node.dyn_ref::<Element>()?;
            if is_function_tag(element) {
                return Some(EditorNode::Tag(read_tag_attrs(element)));
            }
            let tag_name = element.tag_name();
            if tag_name.eq_ignore_ascii_case("div") || tag_name.eq_ignore_ascii_case("p") {
                Some(EditorNode::Block(read_children(node)))
            } else {
                Some(EditorNode::Container(read_children(node)))
            }
        }
        _ => None,
    }
}

pub fn is_function_tag(element: &Element) -> bool {
    element.class_list().contains(FUNCTION_TAG_CLASS)
}

/// Collect `data-*` attributes, keyed without the prefix.
pub fn read_attribute_bag(element: &Element) -> AttributeBag {
    let mut bag = AttributeBag::new();
    for name in element.get_attribute_names().iter() {
        let Some(name) = name.as_string() else {
            continue;
        };
        if let Some(key) = name.strip_prefix(DATA_PREFIX) {
            let value = element.get_attribute(&name).unwrap_or_default();
            bag.insert(key.into(), value);
        }
    }
    bag
}

pub fn read_tag_attrs(element: &Element) -> TagAttrs {
    TagAttrs::from_bag(&read_attribute_bag(element))
}
