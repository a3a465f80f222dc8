//! RawText JSON → editable tree.
//!
//! Validation of the top-level shape happens before anything is built, so a
//! failed decode never leaves a half-rebuilt surface behind. Individual
//! components are decoded permissively: unrecognized shapes are skipped.

use serde_json::Value;

use crate::component::{CONDITIONAL_KEY, conditional_parts};
use crate::error::{DecodeError, json_type_name};
use crate::tag::TagAttrs;
use crate::tree::EditorNode;

/// Parse user input and rebuild the editable tree from it.
pub fn decode(input: &str) -> Result<Vec<EditorNode>, DecodeError> {
    let components = parse_rawtext(input)?;
    let nodes = decode_components(&components);
    tracing::debug!(
        components = components.len(),
        nodes = nodes.len(),
        "decoded rawtext"
    );
    Ok(nodes)
}

/// Parse and validate `{"rawtext": [...]}`, returning the component array.
pub fn parse_rawtext(input: &str) -> Result<Vec<Value>, DecodeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    let mut parsed: Value = serde_json::from_str(input)?;
    match parsed.get_mut("rawtext").map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(DecodeError::RawtextNotArray {
            found: json_type_name(&other),
        }),
        None => Err(DecodeError::MissingRawtext),
    }
}

/// Decode every recognizable component, in order.
pub fn decode_components(components: &[Value]) -> Vec<EditorNode> {
    components.iter().filter_map(decode_component).collect()
}

/// Decode one component, or `None` for shapes the editor does not model.
///
/// Checked in order: text, conditional sentinel, score, selector, translate.
/// A `%%2` component whose `with` looks like a conditional but lacks the
/// inner `rawtext` is dropped rather than treated as a plain translation.
pub fn decode_component(component: &Value) -> Option<EditorNode> {
    if let Some(text) = component.get("text") {
        let text = match text {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Some(EditorNode::Text(text));
    }

    let translate = component.get("translate").and_then(non_empty_str);
    let with = component.get("with");

    if translate == Some(CONDITIONAL_KEY) {
        if let Some(outer) = with.and_then(|w| w.get("rawtext")).and_then(Value::as_array) {
            if outer.len() == 2 {
                let (condition, then) = conditional_parts(with?)?;
                let condition = if condition.is_null() {
                    "{}".to_string()
                } else {
                    condition.to_string()
                };
                let then = Value::Array(then.to_vec()).to_string();
                return Some(TagAttrs::Conditional { condition, then }.into());
            }
        }
    }

    if let Some(score) = component.get("score").filter(|s| is_truthy(s)) {
        let field = |key: &str| {
            score
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        return Some(
            TagAttrs::Score {
                name: field("name"),
                objective: field("objective"),
            }
            .into(),
        );
    }

    if let Some(selector) = component.get("selector").and_then(non_empty_str) {
        return Some(
            TagAttrs::Selector {
                selector: selector.to_string(),
            }
            .into(),
        );
    }

    if let Some(translate) = translate {
        let with = match with {
            Some(w) if is_truthy(w) => w.to_string(),
            _ => "[]".to_string(),
        };
        return Some(
            TagAttrs::Translate {
                translate: translate.to_string(),
                with,
            }
            .into(),
        );
    }

    tracing::trace!(%component, "skipping unrecognized component");
    None
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// JavaScript-style truthiness, which is what RawJSON producers assume.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_rejects_missing_rawtext() {
        assert!(matches!(decode(r#"{"foo":1}"#), Err(DecodeError::MissingRawtext)));
    }

    #[test]
    fn test_rejects_non_array_rawtext() {
        assert!(matches!(
            decode(r#"{"rawtext":{"text":"a"}}"#),
            Err(DecodeError::RawtextNotArray { found: "object" })
        ));
    }

    #[test]
    fn test_rejects_invalid_json_and_empty() {
        assert!(matches!(decode("{rawtext"), Err(DecodeError::InvalidJson(_))));
        assert!(matches!(decode("   "), Err(DecodeError::EmptyInput)));
        assert!(matches!(decode("[1,2]"), Err(DecodeError::MissingRawtext)));
    }

    #[test]
    fn test_decode_each_kind() {
        let nodes = decode(
            r#"{"rawtext":[
                {"text":"Hi "},
                {"score":{"name":"@p","objective":"coins"}},
                {"selector":"@a[tag=vip]"},
                {"translate":"welcome","with":["a"]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            nodes,
            vec![
                EditorNode::text("Hi "),
                TagAttrs::Score {
                    name: "@p".into(),
                    objective: "coins".into()
                }
                .into(),
                TagAttrs::Selector {
                    selector: "@a[tag=vip]".into()
                }
                .into(),
                TagAttrs::Translate {
                    translate: "welcome".into(),
                    with: r#"["a"]"#.into()
                }
                .into(),
            ]
        );
    }

    #[test]
    fn test_decode_conditional() {
        let node = decode_component(&json!({
            "translate": "%%2",
            "with": {"rawtext": [{"selector": "@a[tag=vip]"}, {"rawtext": [{"text": "hi"}]}]}
        }));
        assert_eq!(
            node,
            Some(
                TagAttrs::Conditional {
                    condition: r#"{"selector":"@a[tag=vip]"}"#.into(),
                    then: r#"[{"text":"hi"}]"#.into(),
                }
                .into()
            )
        );
    }

    #[test]
    fn test_conditional_with_broken_then_is_dropped() {
        let node = decode_component(&json!({
            "translate": "%%2",
            "with": {"rawtext": [{"selector": "@a"}, {"text": "no inner rawtext"}]}
        }));
        assert_eq!(node, None);
    }

    #[test]
    fn test_sentinel_with_array_is_plain_translate() {
        let node = decode_component(&json!({"translate": "%%2", "with": ["a", "b"]}));
        assert_eq!(
            node,
            Some(
                TagAttrs::Translate {
                    translate: "%%2".into(),
                    with: r#"["a","b"]"#.into()
                }
                .into()
            )
        );
    }

    #[test]
    fn test_translate_without_with() {
        let node = decode_component(&json!({"translate": "k"}));
        assert_eq!(
            node,
            Some(
                TagAttrs::Translate {
                    translate: "k".into(),
                    with: "[]".into()
                }
                .into()
            )
        );
    }

    #[test]
    fn test_unknown_shapes_skipped() {
        let nodes = decode(r#"{"rawtext":[{"color":"red"},{"selector":""},42,{"text":"ok"}]}"#).unwrap();
        assert_eq!(nodes, vec![EditorNode::text("ok")]);
    }

    #[test]
    fn test_score_missing_fields_default() {
        let node = decode_component(&json!({"score": {"name": "@s"}}));
        assert_eq!(
            node,
            Some(
                TagAttrs::Score {
                    name: "@s".into(),
                    objective: String::new()
                }
                .into()
            )
        );
    }

    #[test]
    fn test_empty_text_kept() {
        assert_eq!(
            decode_component(&json!({"text": ""})),
            Some(EditorNode::text(""))
        );
    }
}
