//! WASM browser tests for rawjson-editor-js.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use rawjson_editor_js::{EditorConfig, JsEditor};
use web_sys::HtmlElement;

/// Add surface, output and preview elements with ids unique to `prefix`.
fn mount_points(prefix: &str, surface_html: &str) -> EditorConfig {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();
    let config = EditorConfig {
        editor_id: format!("{prefix}-editor"),
        output_id: format!("{prefix}-output"),
        preview_id: format!("{prefix}-preview"),
        ..EditorConfig::default()
    };
    for id in [&config.editor_id, &config.output_id, &config.preview_id] {
        let el = doc.create_element("div").unwrap();
        el.set_id(id);
        body.append_child(&el).unwrap();
    }
    doc.get_element_by_id(&config.editor_id)
        .unwrap()
        .set_inner_html(surface_html);
    config
}

fn element(id: &str) -> HtmlElement {
    rawjson_editor_browser::html_element_by_id(id).unwrap()
}

fn editor(config: &EditorConfig) -> JsEditor {
    JsEditor::new(serde_wasm_bindgen::to_value(config).unwrap())
        .ok()
        .expect("editor config rejected")
}

#[wasm_bindgen_test]
fn test_mount_writes_output_and_preview() {
    let config = mount_points(
        "mount",
        r#"Hi <span class="function-tag" data-type="score" data-name="@p" data-objective="coins">[@p:coins]</span>"#,
    );
    let mut editor = editor(&config);
    assert!(editor.mount(None).is_ok());

    let json = editor.get_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"rawtext": [
            {"text": "Hi "},
            {"score": {"name": "@p", "objective": "coins"}}
        ]})
    );
    assert_eq!(element(&config.output_id).text_content(), Some(json));

    let preview = element(&config.preview_id);
    assert_eq!(preview.child_element_count(), 2);
    assert_eq!(
        preview.last_element_child().unwrap().text_content().as_deref(),
        Some("[@p:coins]")
    );
}

#[wasm_bindgen_test]
fn test_decode_keeps_translate_with_object() {
    let config = mount_points("decode", "");
    let mut editor = editor(&config);
    assert!(editor.mount(None).is_ok());

    let input = r#"{"rawtext":[{"translate":"chat.msg","with":{"rawtext":[{"text":"Steve"}]}}]}"#;
    assert!(editor.decode(input).is_ok());

    let actual: serde_json::Value = serde_json::from_str(&editor.get_json().unwrap()).unwrap();
    let expected: serde_json::Value = serde_json::from_str(input).unwrap();
    assert_eq!(actual, expected);
}

#[wasm_bindgen_test]
fn test_decode_rejection_leaves_surface() {
    let config = mount_points("reject", "keep me");
    let mut editor = editor(&config);
    assert!(editor.mount(None).is_ok());

    assert!(editor.decode(r#"{"foo":1}"#).is_err());
    assert_eq!(
        element(&config.editor_id).text_content().as_deref(),
        Some("keep me")
    );
}

#[wasm_bindgen_test]
fn test_init_twice_keeps_running() {
    rawjson_editor_js::init();
    rawjson_editor_js::init();
    let config = mount_points("reinit", "still works");
    let mut editor = editor(&config);
    assert!(editor.mount(None).is_ok());
    assert!(editor.get_json().unwrap().contains("still works"));
}
