//! Stateless grammar helpers for the modal editors.

use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

use rawjson_editor_core::{
    ARGUMENT_KEYS, AttributeBag, ConditionView, FORMAT_CODES, HasitemCondition, ParamMap,
    ScoreMatch, Selector, TagAttrs, build_hasitem, build_scores, display_selector,
    format_hasitem_display, parse_hasitem, parse_scores, render_label,
};

use crate::types::{JsConditionForm, JsFormatCode, JsHasitemCondition, JsScoreEntry, JsSelector};

// === Selectors ===

/// Split a selector string into its base and ordered arguments.
#[wasm_bindgen(js_name = parseSelector)]
pub fn parse_selector(selector: &str) -> JsSelector {
    JsSelector::from(&Selector::parse(selector))
}

/// Build a selector string from form state.
#[wasm_bindgen(js_name = buildSelector)]
pub fn build_selector(selector: JsSelector) -> String {
    Selector::from(&selector).build()
}

/// Short form shown on selector tags, e.g. `@a[...]`.
#[wasm_bindgen(js_name = displaySelector)]
pub fn display_selector_js(selector: &str) -> String {
    display_selector(selector)
}

/// The argument keys in the order the selector form shows them.
#[wasm_bindgen(js_name = argumentKeys)]
pub fn argument_keys() -> Vec<String> {
    ARGUMENT_KEYS.iter().map(|key| key.to_string()).collect()
}

// === hasitem ===

/// Parse a `hasitem` value (object or array of objects) into rows.
#[wasm_bindgen(js_name = parseHasitem)]
pub fn parse_hasitem_js(value: &str) -> Result<JsValue, JsError> {
    let rows: Vec<JsHasitemCondition> = parse_hasitem(value)
        .iter()
        .map(JsHasitemCondition::from)
        .collect();
    Ok(serde_wasm_bindgen::to_value(&rows)?)
}

/// Build a `hasitem` value from rows. Empty rows are dropped.
#[wasm_bindgen(js_name = buildHasitem)]
pub fn build_hasitem_js(rows: JsValue) -> Result<String, JsError> {
    let rows: Vec<JsHasitemCondition> = serde_wasm_bindgen::from_value(rows)?;
    let conditions: Vec<HasitemCondition> = rows.iter().map(HasitemCondition::from).collect();
    Ok(build_hasitem(&conditions))
}

/// Readable summary of a `hasitem` value.
#[wasm_bindgen(js_name = displayHasitem)]
pub fn display_hasitem(value: &str) -> String {
    format_hasitem_display(value)
}

// === scores ===

/// Parse a `scores` value into rows, flagging malformed matches.
#[wasm_bindgen(js_name = parseScores)]
pub fn parse_scores_js(value: &str) -> Result<JsValue, JsError> {
    let rows: Vec<JsScoreEntry> = parse_scores(value)
        .iter()
        .map(|(objective, value)| JsScoreEntry {
            objective: objective.to_string(),
            value: value.to_string(),
            valid: ScoreMatch::parse(value).is_some(),
        })
        .collect();
    Ok(serde_wasm_bindgen::to_value(&rows)?)
}

/// Build a `scores` value from rows. Rows with a blank objective are dropped.
#[wasm_bindgen(js_name = buildScores)]
pub fn build_scores_js(rows: JsValue) -> Result<String, JsError> {
    let rows: Vec<JsScoreEntry> = serde_wasm_bindgen::from_value(rows)?;
    let mut scores = ParamMap::new();
    for row in rows {
        let objective = row.objective.trim();
        if objective.is_empty() {
            continue;
        }
        scores.insert(objective, row.value.trim());
    }
    Ok(build_scores(&scores))
}

/// Whether `value` is `5`, `1..5`, `1..`, `..5` or a `!` negation of one.
#[wasm_bindgen(js_name = isValidScore)]
pub fn is_valid_score(value: &str) -> bool {
    ScoreMatch::parse(value).is_some()
}

// === Conditions ===

/// Pick the conditional editor tab for a stored condition.
#[wasm_bindgen(js_name = classifyCondition)]
pub fn classify_condition(condition: &str) -> JsConditionForm {
    JsConditionForm::from(&ConditionView::classify(condition))
}

/// Serialize the conditional editor form back to a condition string.
#[wasm_bindgen(js_name = buildCondition)]
pub fn build_condition(form: JsConditionForm) -> Result<String, JsError> {
    Ok(ConditionView::from(&form).to_condition()?.to_string())
}

// === Toolbar and labels ===

#[wasm_bindgen(js_name = formatCodes)]
pub fn format_codes() -> Result<JsValue, JsError> {
    let codes: Vec<JsFormatCode> = FORMAT_CODES.iter().map(JsFormatCode::from).collect();
    Ok(serde_wasm_bindgen::to_value(&codes)?)
}

/// Label for a tag with these (unprefixed) attributes.
#[wasm_bindgen(js_name = tagLabel)]
pub fn tag_label(attrs: JsValue) -> Result<String, JsError> {
    let fields: BTreeMap<String, String> = serde_wasm_bindgen::from_value(attrs)?;
    let bag: AttributeBag = fields
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect();
    Ok(render_label(&TagAttrs::from_bag(&bag)))
}
