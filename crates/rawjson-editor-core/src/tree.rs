//! Platform-independent view of the editable surface.
//!
//! The browser layer translates DOM nodes into this tree before encoding and
//! materializes it back into DOM nodes after decoding.

use crate::tag::TagAttrs;

/// One node of the editable surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorNode {
    /// A run of literal text.
    Text(String),
    /// Paragraph/division element. Forces a line boundary before its children.
    Block(Vec<EditorNode>),
    /// Functional tag widget.
    Tag(TagAttrs),
    /// Any other element; traversed transparently.
    Container(Vec<EditorNode>),
}

impl EditorNode {
    pub fn text(text: impl Into<String>) -> Self {
        EditorNode::Text(text.into())
    }

    pub fn block(children: impl IntoIterator<Item = EditorNode>) -> Self {
        EditorNode::Block(children.into_iter().collect())
    }

    pub fn container(children: impl IntoIterator<Item = EditorNode>) -> Self {
        EditorNode::Container(children.into_iter().collect())
    }

    pub fn children(&self) -> &[EditorNode] {
        match self {
            EditorNode::Block(children) | EditorNode::Container(children) => children,
            EditorNode::Text(_) | EditorNode::Tag(_) => &[],
        }
    }

    pub fn as_tag(&self) -> Option<&TagAttrs> {
        match self {
            EditorNode::Tag(attrs) => Some(attrs),
            _ => None,
        }
    }
}

impl From<TagAttrs> for EditorNode {
    fn from(attrs: TagAttrs) -> Self {
        EditorNode::Tag(attrs)
    }
}
