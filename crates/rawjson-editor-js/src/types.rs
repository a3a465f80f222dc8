//! Types exposed to JavaScript via wasm-bindgen.

use rawjson_editor_core::{
    ConditionKind, ConditionView, FormatCode, FormatStyle, HASITEM_KEYS, HasitemCondition,
    ParamMap, Selector, SelectorBase,
};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

fn default_editor_id() -> String {
    "richTextEditor".into()
}

fn default_output_id() -> String {
    "jsonOutput".into()
}

fn default_preview_id() -> String {
    "preview".into()
}

fn default_items_url() -> String {
    "static/data/items.json".into()
}

fn default_slots_url() -> String {
    "static/data/slots.json".into()
}

/// Mount-time configuration. Every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Content-editable surface.
    #[serde(default = "default_editor_id")]
    pub editor_id: String,
    /// Element whose text receives the pretty-printed JSON.
    #[serde(default = "default_output_id")]
    pub output_id: String,
    #[serde(default = "default_preview_id")]
    pub preview_id: String,
    /// Where modals are appended; `document.body` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modal_root_id: Option<String>,
    #[serde(default = "default_items_url")]
    pub items_url: String,
    #[serde(default = "default_slots_url")]
    pub slots_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            editor_id: default_editor_id(),
            output_id: default_output_id(),
            preview_id: default_preview_id(),
            modal_root_id: None,
            items_url: default_items_url(),
            slots_url: default_slots_url(),
        }
    }
}

/// One `key=value` pair, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsParam {
    pub key: String,
    pub value: String,
}

fn params_to_js(params: &ParamMap) -> Vec<JsParam> {
    params
        .iter()
        .map(|(key, value)| JsParam {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Selector as edited by the advanced selector form.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsSelector {
    /// Single letter: `p`, `r`, `a`, `e`, `s` or `n`.
    pub base: String,
    #[serde(default)]
    pub params: Vec<JsParam>,
}

impl From<&Selector> for JsSelector {
    fn from(selector: &Selector) -> Self {
        Self {
            base: selector.base.as_char().to_string(),
            params: params_to_js(&selector.params),
        }
    }
}

impl From<&JsSelector> for Selector {
    fn from(js: &JsSelector) -> Self {
        Selector::from_fields(
            SelectorBase::from_str_lossy(&js.base),
            js.params.iter().map(|p| (p.key.as_str(), p.value.as_str())),
        )
    }
}

/// One hasitem condition. Keys outside the known five stay in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsHasitemCondition {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub extra: Vec<JsParam>,
}

impl From<&HasitemCondition> for JsHasitemCondition {
    fn from(condition: &HasitemCondition) -> Self {
        let field = |v: Option<&str>| v.unwrap_or_default().to_string();
        Self {
            item: field(condition.item()),
            data: field(condition.data()),
            quantity: field(condition.quantity()),
            location: field(condition.location()),
            slot: field(condition.slot()),
            extra: condition
                .fields()
                .iter()
                .filter(|(key, _)| !HASITEM_KEYS.contains(key))
                .map(|(key, value)| JsParam {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

impl From<&JsHasitemCondition> for HasitemCondition {
    fn from(js: &JsHasitemCondition) -> Self {
        let mut condition = HasitemCondition::default();
        let known = [
            ("item", &js.item),
            ("data", &js.data),
            ("quantity", &js.quantity),
            ("location", &js.location),
            ("slot", &js.slot),
        ];
        for (key, value) in known {
            condition.set(key, value.trim());
        }
        for param in &js.extra {
            condition.set(param.key.trim(), param.value.trim());
        }
        condition
    }
}

/// One `objective=value` row of the scores editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsScoreEntry {
    pub objective: String,
    pub value: String,
    /// Whether `value` is a well-formed score match.
    #[serde(default)]
    pub valid: bool,
}

/// Flat form state of the conditional editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsConditionForm {
    /// `score`, `selector` or `rawjson`.
    pub kind: String,
    #[serde(default)]
    pub selector: String,
    #[serde(default)]
    pub score_name: String,
    #[serde(default)]
    pub score_objective: String,
    #[serde(default)]
    pub score_matcher: String,
    #[serde(default)]
    pub raw: String,
}

impl From<&ConditionView> for JsConditionForm {
    fn from(view: &ConditionView) -> Self {
        let mut form = JsConditionForm {
            kind: view.kind().as_str().to_string(),
            ..Default::default()
        };
        match view {
            ConditionView::Score {
                name,
                objective,
                matcher,
            } => {
                form.score_name = name.clone();
                form.score_objective = objective.clone();
                form.score_matcher = matcher.clone();
            }
            ConditionView::Selector(selector) => form.selector = selector.clone(),
            ConditionView::RawJson(raw) => form.raw = raw.clone(),
        }
        form
    }
}

impl From<&JsConditionForm> for ConditionView {
    fn from(form: &JsConditionForm) -> Self {
        match ConditionKind::parse(&form.kind) {
            Some(ConditionKind::Score) => ConditionView::Score {
                name: form.score_name.trim().to_string(),
                objective: form.score_objective.trim().to_string(),
                matcher: form.score_matcher.trim().to_string(),
            },
            Some(ConditionKind::Selector) => ConditionView::Selector(form.selector.trim().to_string()),
            Some(ConditionKind::RawJson) | None => ConditionView::RawJson(form.raw.clone()),
        }
    }
}

/// Toolbar entry for a `§` format code.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsFormatCode {
    pub code: String,
    pub name: String,
    /// CSS colour for colour codes, absent for style codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&FormatCode> for JsFormatCode {
    fn from(fc: &FormatCode) -> Self {
        Self {
            code: fc.code.to_string(),
            name: fc.name.to_string(),
            color: match fc.style {
                FormatStyle::Color(hex) => Some(hex.to_string()),
                _ => None,
            },
        }
    }
}

/// Catalog row for item and slot pickers.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsCatalogEntry {
    pub id: String,
    pub name: String,
}
