//! Display labels for functional tags.
//!
//! Labels are derived from [`TagAttrs`] every time they are needed and never
//! stored next to the attributes. Malformed JSON in any attribute only
//! degrades the label to a placeholder.

use serde_json::Value;

use crate::component::{CONDITIONAL_KEY, conditional_parts};
use crate::selector::display_selector;
use crate::tag::TagAttrs;

/// Label of a conditional-sentinel translation.
pub const CONDITIONAL_SENTINEL_LABEL: &str = "[IF...THEN...]";

/// Compact label shown inside the tag widget.
pub fn render_label(attrs: &TagAttrs) -> String {
    match attrs {
        TagAttrs::Score { name, objective } => format!("[{name}:{objective}]"),
        TagAttrs::Selector { selector } => {
            let selector = if selector.is_empty() { "@p" } else { selector };
            format!("[{}]", display_selector(selector))
        }
        TagAttrs::Translate { translate, with } => {
            if translate == CONDITIONAL_KEY && with_is_conditional(with) {
                CONDITIONAL_SENTINEL_LABEL.to_string()
            } else {
                format!("[t:{translate}]")
            }
        }
        TagAttrs::Conditional { condition, .. } => {
            format!("[IF {} THEN ...]", condition_head(condition))
        }
        TagAttrs::Unknown { kind } => format!("[{kind}]"),
    }
}

/// First key of the condition object, or `...` when there is none.
fn condition_head(condition: &str) -> String {
    let raw = if condition.trim().is_empty() { "{}" } else { condition };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map
            .keys()
            .next()
            .cloned()
            .unwrap_or_else(|| "...".to_string()),
        Ok(_) => "...".to_string(),
        Err(err) => {
            tracing::debug!("condition label fallback: {err}");
            "...".to_string()
        }
    }
}

fn with_is_conditional(with: &str) -> bool {
    serde_json::from_str::<Value>(with).is_ok_and(|value| conditional_parts(&value).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        let attrs = TagAttrs::Score {
            name: "@p".into(),
            objective: "coins".into(),
        };
        assert_eq!(render_label(&attrs), "[@p:coins]");
    }

    #[test]
    fn test_selector_label_formats_hasitem() {
        let attrs = TagAttrs::Selector {
            selector: "@a[hasitem={ item = apple }]".into(),
        };
        assert_eq!(render_label(&attrs), "[@a[hasitem={item=apple}]]");
        // stored attribute is untouched
        assert_eq!(
            attrs,
            TagAttrs::Selector {
                selector: "@a[hasitem={ item = apple }]".into()
            }
        );
    }

    #[test]
    fn test_selector_label_empty() {
        let attrs = TagAttrs::Selector {
            selector: String::new(),
        };
        assert_eq!(render_label(&attrs), "[@p]");
    }

    #[test]
    fn test_translate_label_ignores_bad_with() {
        let attrs = TagAttrs::Translate {
            translate: "welcome.msg".into(),
            with: "not valid json".into(),
        };
        assert_eq!(render_label(&attrs), "[t:welcome.msg]");
    }

    #[test]
    fn test_translate_sentinel_label() {
        let attrs = TagAttrs::Translate {
            translate: "%%2".into(),
            with: r#"{"rawtext":[{"selector":"@a"},{"rawtext":[]}]}"#.into(),
        };
        assert_eq!(render_label(&attrs), "[IF...THEN...]");

        let broken = TagAttrs::Translate {
            translate: "%%2".into(),
            with: "{".into(),
        };
        assert_eq!(render_label(&broken), "[t:%%2]");
    }

    #[test]
    fn test_sentinel_key_with_plain_args_is_translate() {
        let attrs = TagAttrs::Translate {
            translate: "%%2".into(),
            with: r#"["a","b"]"#.into(),
        };
        assert_eq!(render_label(&attrs), "[t:%%2]");
    }

    #[test]
    fn test_conditional_label() {
        let attrs = TagAttrs::Conditional {
            condition: r#"{"score":{"name":"@p","objective":"x"}}"#.into(),
            then: "[]".into(),
        };
        assert_eq!(render_label(&attrs), "[IF score THEN ...]");

        for condition in ["{}", "", "garbage", "[1]"] {
            let attrs = TagAttrs::Conditional {
                condition: condition.into(),
                then: "[]".into(),
            };
            assert_eq!(render_label(&attrs), "[IF ... THEN ...]");
        }
    }

    #[test]
    fn test_unknown_label() {
        let attrs = TagAttrs::Unknown {
            kind: "sparkle".into(),
        };
        assert_eq!(render_label(&attrs), "[sparkle]");
    }
}
