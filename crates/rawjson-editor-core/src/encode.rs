//! Editable tree → RawText components.
//!
//! Malformed JSON inside tag attributes never aborts a pass: `translate`
//! falls back to an empty argument list and `conditional` to an inline error
//! marker, with a `warn!` either way.

use serde_json::Value;

use crate::component::{RawText, RawTextComponent};
use crate::error::{AttrError, json_type_name};
use crate::tag::TagAttrs;
use crate::tree::EditorNode;

/// Text emitted in place of a conditional whose attributes do not parse.
pub const CONDITIONAL_ERROR_TEXT: &str = "[conditional parse error]";

const NBSP: char = '\u{a0}';

/// Encode a whole editable surface.
pub fn encode(nodes: &[EditorNode]) -> RawText {
    let rawtext = encode_nodes(nodes);
    tracing::debug!(components = rawtext.len(), "encoded editor tree");
    RawText::new(rawtext)
}

/// Encode one level of the tree, recursing into blocks and containers.
///
/// Adjacent text components are merged once the level is complete.
pub fn encode_nodes(nodes: &[EditorNode]) -> Vec<RawTextComponent> {
    let mut result = Vec::new();

    for node in nodes {
        match node {
            EditorNode::Text(text) => {
                if !text.is_empty() {
                    result.push(RawTextComponent::text(text.replace(NBSP, " ")));
                }
            }
            EditorNode::Tag(attrs) => {
                if let Some(component) = encode_tag(attrs) {
                    result.push(component);
                }
            }
            EditorNode::Block(children) => {
                let needs_break = result
                    .last()
                    .and_then(RawTextComponent::as_text)
                    .is_some_and(|t| !t.ends_with('\n'));
                if needs_break {
                    result.push(RawTextComponent::text("\n"));
                }
                result.extend(encode_nodes(children));
            }
            EditorNode::Container(children) => {
                result.extend(encode_nodes(children));
            }
        }
    }

    merge_text_runs(result)
}

/// Concatenate adjacent text components, preserving order.
pub fn merge_text_runs(components: Vec<RawTextComponent>) -> Vec<RawTextComponent> {
    let mut merged: Vec<RawTextComponent> = Vec::with_capacity(components.len());
    for component in components {
        if let (Some(RawTextComponent::Text { text: last }), RawTextComponent::Text { text }) =
            (merged.last_mut(), &component)
        {
            last.push_str(text);
            continue;
        }
        merged.push(component);
    }
    merged
}

/// Component for a single tag. Unknown tag kinds produce nothing.
pub fn encode_tag(attrs: &TagAttrs) -> Option<RawTextComponent> {
    let component = match attrs {
        TagAttrs::Score { name, objective } => RawTextComponent::score(name, objective),
        TagAttrs::Selector { selector } => RawTextComponent::selector(selector),
        TagAttrs::Translate { translate, with } => {
            let with = match parse_json_attr("with", with, "[]").and_then(expect_args) {
                Ok(with) => with,
                Err(err) => {
                    tracing::warn!(translate = %translate, "{err}; using empty arguments");
                    Value::Array(Vec::new())
                }
            };
            RawTextComponent::Translate {
                translate: translate.clone(),
                with,
            }
        }
        TagAttrs::Conditional { condition, then } => match encode_conditional(condition, then) {
            Ok(component) => component,
            Err(err) => {
                tracing::warn!("{err}; emitting error marker");
                RawTextComponent::text(CONDITIONAL_ERROR_TEXT)
            }
        },
        TagAttrs::Unknown { kind } => {
            tracing::warn!(kind = %kind, "skipping tag of unknown type");
            return None;
        }
    };
    Some(component)
}

fn encode_conditional(condition: &str, then: &str) -> Result<RawTextComponent, AttrError> {
    let condition = parse_json_attr("condition", condition, "{}")?;
    let then = expect_array("then", parse_json_attr("then", then, "[]")?)?;
    Ok(RawTextComponent::conditional(condition, then))
}

/// Parse a JSON-valued attribute, substituting `empty` for a blank value.
pub(crate) fn parse_json_attr(
    attr: &'static str,
    raw: &str,
    empty: &str,
) -> Result<Value, AttrError> {
    let raw = if raw.trim().is_empty() { empty } else { raw };
    serde_json::from_str(raw).map_err(|source| AttrError::Json { attr, source })
}

/// `with` is kept verbatim when it is an argument array or a
/// `{"rawtext": [...]}` object.
fn expect_args(value: Value) -> Result<Value, AttrError> {
    match value {
        Value::Array(_) | Value::Object(_) => Ok(value),
        other => {
            tracing::trace!(found = json_type_name(&other), "expected array or object");
            Err(AttrError::Shape {
                attr: "with",
                expected: "array or object",
            })
        }
    }
}

fn expect_array(attr: &'static str, value: Value) -> Result<Vec<Value>, AttrError> {
    match value {
        Value::Array(items) => Ok(items),
        other => {
            tracing::trace!(attr, found = json_type_name(&other), "expected array");
            Err(AttrError::Shape {
                attr,
                expected: "array",
            })
        }
    }
}
