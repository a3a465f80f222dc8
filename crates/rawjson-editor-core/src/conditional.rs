//! Form view of a conditional tag's condition.
//!
//! The stored condition is arbitrary JSON. The conditional editor shows it
//! as one of three forms depending on its top-level key, and writes it back
//! from whichever form the user filled in.

use serde_json::{Map, Value, json};

use crate::error::AttrError;
use crate::selector::ScoreMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Score,
    Selector,
    RawJson,
}

impl ConditionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKind::Score => "score",
            ConditionKind::Selector => "selector",
            ConditionKind::RawJson => "rawjson",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "score" => Some(ConditionKind::Score),
            "selector" => Some(ConditionKind::Selector),
            "rawjson" | "raw" => Some(ConditionKind::RawJson),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionView {
    Score {
        name: String,
        objective: String,
        /// `min..max`, `min..`, `..max`, `value` or `!not`; empty if unset.
        matcher: String,
    },
    Selector(String),
    /// Anything else, kept as pretty-printed JSON text.
    RawJson(String),
}

impl ConditionView {
    /// Classify a stored `condition` attribute.
    pub fn classify(condition: &str) -> Self {
        let raw = if condition.trim().is_empty() { "{}" } else { condition };
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(_) => return ConditionView::RawJson(condition.to_string()),
        };

        if let Some(score) = value.get("score").and_then(Value::as_object) {
            return ConditionView::Score {
                name: str_field(score, "name"),
                objective: str_field(score, "objective"),
                matcher: score_matcher_display(score),
            };
        }
        if let Some(selector) = value.get("selector") {
            return ConditionView::Selector(scalar_text(selector));
        }
        ConditionView::RawJson(serde_json::to_string_pretty(&value).unwrap_or_default())
    }

    pub fn kind(&self) -> ConditionKind {
        match self {
            ConditionView::Score { .. } => ConditionKind::Score,
            ConditionView::Selector(_) => ConditionKind::Selector,
            ConditionView::RawJson(_) => ConditionKind::RawJson,
        }
    }

    /// Build the condition JSON this form describes.
    pub fn to_condition(&self) -> Result<Value, AttrError> {
        match self {
            ConditionView::Selector(selector) => Ok(json!({ "selector": selector })),
            ConditionView::Score {
                name,
                objective,
                matcher,
            } => {
                let mut score = Map::new();
                score.insert("name".into(), Value::String(name.clone()));
                score.insert("objective".into(), Value::String(objective.clone()));
                if !matcher.trim().is_empty() {
                    let parsed = ScoreMatch::parse(matcher).ok_or(AttrError::Shape {
                        attr: "condition",
                        expected: "score range such as `1..5`, `3` or `!0`",
                    })?;
                    write_matcher(&mut score, &parsed);
                }
                Ok(json!({ "score": score }))
            }
            ConditionView::RawJson(raw) => {
                let raw = if raw.trim().is_empty() { "{}" } else { raw };
                serde_json::from_str(raw).map_err(|source| AttrError::Json {
                    attr: "condition",
                    source,
                })
            }
        }
    }
}

/// Render the `{min, max, value, not}` fields of a score condition.
pub fn score_matcher_display(score: &Map<String, Value>) -> String {
    let field = |key: &str| score.get(key).filter(|v| !v.is_null()).map(scalar_text);
    match (field("min"), field("max")) {
        (Some(min), Some(max)) => format!("{min}..{max}"),
        (Some(min), None) => format!("{min}.."),
        (None, Some(max)) => format!("..{max}"),
        (None, None) => {
            if let Some(value) = field("value") {
                value
            } else if let Some(not) = field("not") {
                format!("!{not}")
            } else {
                String::new()
            }
        }
    }
}

fn write_matcher(score: &mut Map<String, Value>, matcher: &ScoreMatch) {
    match matcher {
        ScoreMatch::Exact(v) => {
            score.insert("value".into(), json!(v));
        }
        ScoreMatch::Range { min, max } => {
            if let Some(min) = min {
                score.insert("min".into(), json!(min));
            }
            if let Some(max) = max {
                score.insert("max".into(), json!(max));
            }
        }
        ScoreMatch::Not(inner) => {
            let not = match inner.as_ref() {
                ScoreMatch::Exact(v) => json!(v),
                other => Value::String(other.to_string()),
            };
            score.insert("not".into(), not);
        }
    }
}

fn str_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key).map(scalar_text).unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_score() {
        let view = ConditionView::classify(
            r#"{"score":{"name":"@p","objective":"coins","min":1,"max":5}}"#,
        );
        assert_eq!(
            view,
            ConditionView::Score {
                name: "@p".into(),
                objective: "coins".into(),
                matcher: "1..5".into(),
            }
        );
        assert_eq!(view.kind(), ConditionKind::Score);
    }

    #[test]
    fn test_classify_selector_and_raw() {
        assert_eq!(
            ConditionView::classify(r#"{"selector":"@a[tag=vip]"}"#),
            ConditionView::Selector("@a[tag=vip]".into())
        );
        assert_eq!(ConditionView::classify("").kind(), ConditionKind::RawJson);
        assert_eq!(
            ConditionView::classify("{oops"),
            ConditionView::RawJson("{oops".into())
        );
    }

    #[test]
    fn test_score_matcher_display() {
        let show = |v: Value| score_matcher_display(v.as_object().unwrap());
        assert_eq!(show(json!({"min": 3})), "3..");
        assert_eq!(show(json!({"max": 9})), "..9");
        assert_eq!(show(json!({"value": 4})), "4");
        assert_eq!(show(json!({"not": 0})), "!0");
        assert_eq!(show(json!({})), "");
    }

    #[test]
    fn test_score_form_round_trip() {
        for matcher in ["1..5", "3..", "..9", "4", "!0", ""] {
            let view = ConditionView::Score {
                name: "@s".into(),
                objective: "lives".into(),
                matcher: matcher.into(),
            };
            let condition = view.to_condition().unwrap();
            assert_eq!(ConditionView::classify(&condition.to_string()), view);
        }
    }

    #[test]
    fn test_bad_forms_error() {
        let score = ConditionView::Score {
            name: "@p".into(),
            objective: "x".into(),
            matcher: "lots".into(),
        };
        assert!(matches!(score.to_condition(), Err(AttrError::Shape { .. })));
        assert!(matches!(
            ConditionView::RawJson("{".into()).to_condition(),
            Err(AttrError::Json { .. })
        ));
    }
}
