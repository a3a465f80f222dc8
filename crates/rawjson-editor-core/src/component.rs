//! RawText wire model.
//!
//! A [`RawText`] document is `{"rawtext": [...]}` where every entry carries
//! exactly one semantic field. Conditionals are not a separate wire shape:
//! they are `translate` components using the reserved `%%2` key, with
//! `with.rawtext = [condition, {"rawtext": then}]`.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Translation key reserved for the if/then encoding.
pub const CONDITIONAL_KEY: &str = "%%2";

/// Scoreboard reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub objective: String,
}

/// One fragment of output text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTextComponent {
    Text {
        text: String,
    },
    Score {
        score: ScoreRef,
    },
    Selector {
        selector: String,
    },
    /// `with` is either an argument array or, for conditionals, an object.
    Translate {
        translate: String,
        #[serde(default = "empty_args")]
        with: Value,
    },
}

fn empty_args() -> Value {
    Value::Array(Vec::new())
}

impl RawTextComponent {
    pub fn text(text: impl Into<String>) -> Self {
        RawTextComponent::Text { text: text.into() }
    }

    pub fn score(name: impl Into<String>, objective: impl Into<String>) -> Self {
        RawTextComponent::Score {
            score: ScoreRef {
                name: name.into(),
                objective: objective.into(),
            },
        }
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        RawTextComponent::Selector {
            selector: selector.into(),
        }
    }

    pub fn translate(key: impl Into<String>, args: Vec<Value>) -> Self {
        RawTextComponent::Translate {
            translate: key.into(),
            with: Value::Array(args),
        }
    }

    /// Canonical if/then encoding.
    pub fn conditional(condition: Value, then: Vec<Value>) -> Self {
        RawTextComponent::Translate {
            translate: CONDITIONAL_KEY.to_string(),
            with: json!({ "rawtext": [condition, { "rawtext": then }] }),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawTextComponent::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Split a conditional into `(condition, then)`, if this is one.
    pub fn as_conditional(&self) -> Option<(&Value, &[Value])> {
        match self {
            RawTextComponent::Translate { translate, with } if translate == CONDITIONAL_KEY => {
                conditional_parts(with)
            }
            _ => None,
        }
    }
}

/// Match `{"rawtext": [condition, {"rawtext": [...]}]}`.
pub fn conditional_parts(with: &Value) -> Option<(&Value, &[Value])> {
    let outer = with.get("rawtext")?.as_array()?;
    let [condition, then] = outer.as_slice() else {
        return None;
    };
    let then = then.get("rawtext")?.as_array()?;
    Some((condition, then.as_slice()))
}

/// Top-level RawJSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawText {
    pub rawtext: Vec<RawTextComponent>,
}

impl RawText {
    pub fn new(rawtext: Vec<RawTextComponent>) -> Self {
        Self { rawtext }
    }

    /// Pretty-printed JSON with 2-space indentation, as shown to the user.
    pub fn to_pretty_json(&self) -> String {
        // Serializing strings, numbers and maps into a String cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
