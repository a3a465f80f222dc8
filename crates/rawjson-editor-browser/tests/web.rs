//! WASM browser tests for rawjson-editor-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use rawjson_editor_browser::{
    DomModalStack, EditorNode, ModalPresenter, RawTextComponent, TagAttrs, TagKind,
    create_function_tag, decode, document, encode, is_function_tag, read_tag_attrs, read_tree,
    rebuild_surface, render_preview_into, write_attrs,
};
use web_sys::Element;

fn surface(html: &str) -> Element {
    let doc = document().unwrap();
    let el = doc.create_element("div").unwrap();
    el.set_inner_html(html);
    el
}

// === Reading the surface ===

#[wasm_bindgen_test]
fn test_read_text_blocks_and_tags() {
    let el = surface(
        r#"Hello <span class="function-tag" data-type="score" data-name="@p" data-objective="coins">[@p:coins]</span><div>next <b>line</b></div>"#,
    );
    let tree = read_tree(&el);
    assert_eq!(
        tree,
        vec![
            EditorNode::text("Hello "),
            EditorNode::Tag(TagAttrs::Score {
                name: "@p".into(),
                objective: "coins".into(),
            }),
            EditorNode::block([
                EditorNode::text("next "),
                EditorNode::container([EditorNode::text("line")]),
            ]),
        ]
    );
}

#[wasm_bindgen_test]
fn test_encode_dom_with_paragraphs() {
    let el = surface("<p>one</p><p>two</p>");
    let json = encode(&read_tree(&el));
    assert_eq!(json.rawtext, vec![RawTextComponent::text("one\ntwo")]);
}

#[wasm_bindgen_test]
fn test_unknown_tag_type_is_kept_as_unknown() {
    let el = surface(r#"<span class="function-tag" data-type="sparkle">[sparkle]</span>"#);
    let tree = read_tree(&el);
    assert_eq!(
        tree,
        vec![EditorNode::Tag(TagAttrs::Unknown {
            kind: "sparkle".into()
        })]
    );
}

// === Writing the surface ===

#[wasm_bindgen_test]
fn test_create_function_tag() {
    let doc = document().unwrap();
    let tag = create_function_tag(&doc, &TagAttrs::default_for(TagKind::Selector)).unwrap();
    assert!(is_function_tag(&tag));
    assert_eq!(tag.get_attribute("contenteditable").as_deref(), Some("false"));
    assert_eq!(tag.get_attribute("data-type").as_deref(), Some("selector"));
    assert_eq!(tag.get_attribute("data-selector").as_deref(), Some("@p"));
    assert_eq!(tag.text_content().as_deref(), Some("[@p]"));
}

#[wasm_bindgen_test]
fn test_write_attrs_replaces_old_keys() {
    let doc = document().unwrap();
    let tag = create_function_tag(&doc, &TagAttrs::default_for(TagKind::Score)).unwrap();
    let translate = TagAttrs::Translate {
        translate: "welcome.msg".into(),
        with: "not valid json".into(),
    };
    write_attrs(&tag, &translate).unwrap();

    assert_eq!(tag.get_attribute("data-name"), None);
    assert_eq!(read_tag_attrs(&tag), translate);
    assert_eq!(tag.text_content().as_deref(), Some("[t:welcome.msg]"));
}

#[wasm_bindgen_test]
fn test_decode_rebuild_read_round_trip() {
    let input = r#"{"rawtext":[{"text":"Hi "},{"selector":"@a[tag=vip]"},{"translate":"%%2","with":{"rawtext":[{"selector":"@p"},{"rawtext":[{"text":"yes"}]}]}}]}"#;
    let nodes = decode(input).unwrap();
    let el = surface("stale content");
    let tags = rebuild_surface(&el, &nodes).unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1].text_content().as_deref(), Some("[IF selector THEN ...]"));
    assert_eq!(read_tree(&el), nodes);

    let expected: serde_json::Value = serde_json::from_str(input).unwrap();
    let actual: serde_json::Value = serde_json::from_str(&encode(&read_tree(&el)).to_pretty_json()).unwrap();
    assert_eq!(actual, expected);
}

// === Preview ===

#[wasm_bindgen_test]
fn test_preview_spans() {
    let el = surface("");
    render_preview_into(
        &el,
        &[
            RawTextComponent::text("Hi "),
            RawTextComponent::score("@p", "coins"),
        ],
    )
    .unwrap();
    assert_eq!(el.child_element_count(), 2);
    let score = el.last_element_child().unwrap();
    assert_eq!(score.class_name(), "text-red-400");
    assert_eq!(score.text_content().as_deref(), Some("[@p:coins]"));
}

// === Modal stack ===

fn container_count() -> u32 {
    document()
        .unwrap()
        .query_selector_all("[id^='modal-container-']")
        .unwrap()
        .length()
}

#[wasm_bindgen_test]
fn test_modal_stack_hides_previous() {
    let mut modals = DomModalStack::new(None);
    let before = container_count();

    modals.show(r#"<div class="modal-content">first</div>"#);
    let first = modals.top_container().unwrap();
    modals.show(r#"<div class="modal-content">second <button class="close-modal-btn">x</button></div>"#);
    let second = modals.top_container().unwrap();

    assert_eq!(modals.depth(), 2);
    assert_eq!(container_count(), before + 2);
    assert!(first.class_list().contains("hidden"));
    assert!(!second.class_list().contains("hidden"));
    assert_eq!(second.style().get_property_value("z-index").unwrap(), "1002");

    modals.hide(None);
    assert_eq!(modals.depth(), 1);
    assert!(!first.class_list().contains("hidden"));
    assert_eq!(container_count(), before + 1);

    modals.clear();
    assert_eq!(modals.depth(), 0);
    assert_eq!(container_count(), before);
}

#[wasm_bindgen_test]
fn test_modal_hide_unknown_handle_is_noop() {
    let mut modals = DomModalStack::new(None);
    let handle = modals.show("<p>only</p>");
    modals.hide(Some(handle));
    modals.hide(Some(handle));
    modals.hide(None);
    assert_eq!(modals.depth(), 0);
}
