//! JsEditor - the conversion orchestrator exposed to JavaScript.
//!
//! The JS view layer owns the markup and modal templates and forwards DOM
//! events here. Every edit re-runs a full encode of the editable surface.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_events::EventListener;
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{ClipboardEvent, HtmlElement, HtmlInputElement};

use rawjson_editor_browser::{
    DomModalStack, FUNCTION_TAG_CLASS, create_function_tag, html_element_by_id,
    insert_node_at_caret, insert_text_at_caret, load_catalogs, paste_plain_text, read_tag_attrs,
    read_tree, rebuild_surface, render_preview_into, write_attrs, write_clipboard_text,
};
use rawjson_editor_core::{
    Catalogs, EditSession, ModalHandle, ModalPresenter, SelectorDestination, TagAttrs,
    TagKind, decode, encode,
};

use crate::types::{EditorConfig, JsCatalogEntry};

/// State shared with tag click listeners.
#[derive(Default)]
struct EditorState {
    session: EditSession<HtmlElement>,
    catalogs: Catalogs,
    json_output: String,
    on_edit: Option<js_sys::Function>,
    tag_listeners: Vec<EventListener>,
}

/// The editor instance exposed to JavaScript.
#[wasm_bindgen]
pub struct JsEditor {
    config: EditorConfig,
    modals: DomModalStack,
    state: Rc<RefCell<EditorState>>,
    mounted: bool,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor. `config` may be omitted to use the default ids.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditor, JsError> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
        };

        Ok(Self {
            modals: DomModalStack::new(config.modal_root_id.clone()),
            config,
            state: Rc::new(RefCell::new(EditorState::default())),
            mounted: false,
        })
    }

    /// The effective configuration.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> EditorConfig {
        self.config.clone()
    }

    // === Mounting ===

    /// Bind to the configured elements.
    ///
    /// `on_edit(tag, attrs)` is called whenever a tag is clicked; the view
    /// layer then shows the matching editor through `showModal`.
    #[wasm_bindgen]
    pub fn mount(&mut self, on_edit: Option<js_sys::Function>) -> Result<(), JsError> {
        let surface = html_element_by_id(&self.config.editor_id)?;
        html_element_by_id(&self.config.output_id)?;
        html_element_by_id(&self.config.preview_id)?;

        self.state.borrow_mut().on_edit = on_edit;

        // Tags already present in static markup.
        let existing = surface
            .query_selector_all(&format!(".{FUNCTION_TAG_CLASS}"))
            .map_err(|e| JsError::new(&format!("Failed to query tags: {:?}", e)))?;
        for i in 0..existing.length() {
            if let Some(tag) = existing.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                self.watch_tag(tag);
            }
        }

        self.mounted = true;
        tracing::debug!(editor = %self.config.editor_id, tags = existing.length(), "editor mounted");
        self.generate_json()
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Detach listeners and close any open modals.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.modals.clear();
        let mut state = self.state.borrow_mut();
        state.tag_listeners.clear();
        state.session.clear();
        state.on_edit = None;
        self.mounted = false;
    }

    #[wasm_bindgen(js_name = setOnEdit)]
    pub fn set_on_edit(&mut self, on_edit: Option<js_sys::Function>) {
        self.state.borrow_mut().on_edit = on_edit;
    }

    // === Surface events ===

    /// Re-encode after any change to the editable surface.
    #[wasm_bindgen(js_name = handleInput)]
    pub fn handle_input(&self) -> Result<(), JsError> {
        self.generate_json()
    }

    /// Paste as plain text only.
    #[wasm_bindgen(js_name = handlePaste)]
    pub fn handle_paste(&self, evt: &ClipboardEvent) -> Result<(), JsError> {
        if paste_plain_text(evt)? {
            self.generate_json()?;
        }
        Ok(())
    }

    /// Insert a tag of `kind` with its default payload at the caret.
    #[wasm_bindgen(js_name = insertFeature)]
    pub fn insert_feature(&self, kind: &str) -> Result<(), JsError> {
        let kind = TagKind::parse(kind)
            .ok_or_else(|| JsError::new(&format!("Unknown feature type: {}", kind)))?;
        let surface = html_element_by_id(&self.config.editor_id)?;
        let document = rawjson_editor_browser::document()?;

        let tag = create_function_tag(&document, &TagAttrs::default_for(kind))?;
        insert_node_at_caret(&surface, &tag)?;
        self.watch_tag(tag);
        self.generate_json()
    }

    /// Insert a `§` format code as literal text at the caret.
    #[wasm_bindgen(js_name = insertCode)]
    pub fn insert_code(&self, code: &str) -> Result<(), JsError> {
        if rawjson_editor_core::find_format_code(code).is_none() {
            tracing::debug!(code, "inserting unrecognized format code");
        }
        let surface = html_element_by_id(&self.config.editor_id)?;
        surface
            .focus()
            .map_err(|e| JsError::new(&format!("Failed to focus editor: {:?}", e)))?;
        insert_text_at_caret(code)?;
        self.generate_json()
    }

    // === Tag editing ===

    /// Start editing `tag`, as if it had been clicked.
    #[wasm_bindgen(js_name = editTag)]
    pub fn edit_tag(&self, tag: HtmlElement) {
        begin_edit(&self.state, tag);
    }

    /// Attributes of the tag under edit, or `undefined`.
    #[wasm_bindgen(js_name = editingAttrs)]
    pub fn editing_attrs(&self) -> Result<JsValue, JsError> {
        match self.editing_tag() {
            Some(tag) => attrs_to_js(&read_tag_attrs(&tag)),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Write form `fields` onto the tag under edit, then close the editor.
    ///
    /// Field names are the attribute names of the tag's kind
    /// (`name`/`objective`, `translate`/`with`, `condition`/`then`, ...).
    #[wasm_bindgen(js_name = applyEdit)]
    pub fn apply_edit(&mut self, fields: JsValue) -> Result<(), JsError> {
        let fields: BTreeMap<String, String> = serde_wasm_bindgen::from_value(fields)
            .map_err(|e| JsError::new(&format!("Invalid edit fields: {}", e)))?;
        let tag = self
            .editing_tag()
            .ok_or_else(|| JsError::new("No tag is being edited"))?;

        let current = read_tag_attrs(&tag);
        let kind = current
            .kind()
            .ok_or_else(|| JsError::new(&format!("Cannot edit tag of type {}", current.kind_name())))?;
        let attrs = TagAttrs::from_fields(kind, |key| {
            fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
        });

        write_attrs(&tag, &attrs)?;
        tracing::debug!(kind = kind.as_str(), "applied tag edit");
        self.generate_json()?;
        self.modals.hide(None);
        Ok(())
    }

    /// Abandon the current edit and close its editor.
    #[wasm_bindgen(js_name = cancelEdit)]
    pub fn cancel_edit(&mut self) {
        self.state.borrow_mut().session.finish_edit();
        self.modals.hide(None);
    }

    /// Send the next selector-editor result to the input with this id
    /// instead of the tag under edit.
    #[wasm_bindgen(js_name = targetSelectorInput)]
    pub fn target_selector_input(&self, input_id: &str) {
        self.state.borrow_mut().session.target_input(input_id);
    }

    /// Deliver a built selector string and close the selector editor.
    #[wasm_bindgen(js_name = applySelectorEdit)]
    pub fn apply_selector_edit(&mut self, selector: &str) -> Result<(), JsError> {
        let destination = {
            let mut state = self.state.borrow_mut();
            match state.session.route_selector() {
                Some(SelectorDestination::Input(id)) => Some(Err(id)),
                Some(SelectorDestination::Tag(tag)) => Some(Ok(tag.clone())),
                None => None,
            }
        };

        match destination {
            Some(Ok(tag)) => {
                write_attrs(
                    &tag,
                    &TagAttrs::Selector {
                        selector: selector.to_string(),
                    },
                )?;
            }
            Some(Err(input_id)) => {
                let input: HtmlInputElement = html_element_by_id(&input_id)?
                    .dyn_into()
                    .map_err(|_| JsError::new(&format!("#{} is not an input", input_id)))?;
                input.set_value(selector);
            }
            None => {
                tracing::debug!("selector edit with nothing to apply it to");
                return Ok(());
            }
        }

        self.generate_json()?;
        self.modals.hide(None);
        Ok(())
    }

    // === Decode / output ===

    /// Replace the editable surface with the decoded `input`.
    ///
    /// Nothing is touched when decoding fails; the error message is meant
    /// to be shown next to the input box.
    #[wasm_bindgen]
    pub fn decode(&mut self, input: &str) -> Result<(), JsError> {
        let nodes = decode(input)?;
        let surface = html_element_by_id(&self.config.editor_id)?;
        let tags = rebuild_surface(&surface, &nodes)?;

        {
            let mut state = self.state.borrow_mut();
            state.tag_listeners.clear();
            state.session.clear();
        }
        for tag in tags {
            self.watch_tag(tag);
        }

        tracing::debug!(nodes = nodes.len(), "decoded into editor");
        self.generate_json()?;
        self.modals.hide(None);
        Ok(())
    }

    /// The last encoded JSON, if any.
    #[wasm_bindgen(js_name = getJson)]
    pub fn get_json(&self) -> Option<String> {
        let state = self.state.borrow();
        (!state.json_output.is_empty()).then(|| state.json_output.clone())
    }

    /// Copy the JSON output to the clipboard. Resolves to whether anything
    /// was copied.
    #[wasm_bindgen(js_name = copyJson)]
    pub fn copy_json(&self) -> Promise {
        let json = self.get_json();
        future_to_promise(async move {
            let Some(json) = json else {
                return Ok(JsValue::FALSE);
            };
            write_clipboard_text(&json)
                .await
                .map(|_| JsValue::TRUE)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
    }

    // === Modals ===

    /// Show `content` (HTML) on top of the modal stack.
    #[wasm_bindgen(js_name = showModal)]
    pub fn show_modal(&mut self, content: &str) -> String {
        self.modals.show(content).to_string()
    }

    /// Hide a modal by handle, or the top one.
    #[wasm_bindgen(js_name = hideModal)]
    pub fn hide_modal(&mut self, handle: Option<String>) {
        let handle = match handle.as_deref().map(str::parse::<ModalHandle>) {
            Some(Ok(handle)) => Some(handle),
            Some(Err(e)) => {
                tracing::debug!("ignoring bad modal handle: {e}");
                return;
            }
            None => None,
        };
        self.modals.hide(handle);
    }

    /// Container of the visible modal, for reading form fields.
    #[wasm_bindgen(js_name = topModal)]
    pub fn top_modal(&self) -> Option<HtmlElement> {
        self.modals.top_container()
    }

    #[wasm_bindgen(js_name = modalDepth)]
    pub fn modal_depth(&self) -> usize {
        self.modals.depth()
    }

    // === Catalogs ===

    /// Fetch the item and slot catalogs. Failures leave them empty.
    #[wasm_bindgen(js_name = loadCatalogs)]
    pub fn load_catalogs(&self) -> Promise {
        let state = Rc::downgrade(&self.state);
        let items_url = self.config.items_url.clone();
        let slots_url = self.config.slots_url.clone();
        future_to_promise(async move {
            let catalogs = load_catalogs(&items_url, &slots_url).await;
            if let Some(state) = state.upgrade() {
                state.borrow_mut().catalogs = catalogs;
            }
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Display name of an item id, or the id itself.
    #[wasm_bindgen(js_name = itemName)]
    pub fn item_name(&self, id: &str) -> String {
        self.state.borrow().catalogs.items.display_name(id).to_string()
    }

    #[wasm_bindgen(js_name = slotName)]
    pub fn slot_name(&self, id: &str) -> String {
        self.state.borrow().catalogs.slots.display_name(id).to_string()
    }

    /// Items whose id or name contains `query`.
    #[wasm_bindgen(js_name = searchItems)]
    pub fn search_items(&self, query: &str) -> Result<JsValue, JsError> {
        let state = self.state.borrow();
        catalog_entries(state.catalogs.items.search(query))
    }

    /// Every known inventory slot.
    #[wasm_bindgen(js_name = slotEntries)]
    pub fn slot_entries(&self) -> Result<JsValue, JsError> {
        let state = self.state.borrow();
        catalog_entries(state.catalogs.slots.iter().collect())
    }
}

impl JsEditor {
    fn editing_tag(&self) -> Option<HtmlElement> {
        self.state.borrow().session.editing().cloned()
    }

    /// Open the tag's editor when it is clicked.
    fn watch_tag(&self, tag: HtmlElement) {
        let state = Rc::downgrade(&self.state);
        let target = tag.clone();
        let listener = EventListener::new(&tag, "click", move |_| {
            if let Some(state) = state.upgrade() {
                begin_edit(&state, target.clone());
            }
        });
        self.state.borrow_mut().tag_listeners.push(listener);
    }

    /// Encode the surface, then refresh the output and preview elements.
    pub(crate) fn generate_json(&self) -> Result<(), JsError> {
        let surface = html_element_by_id(&self.config.editor_id)?;
        let rawtext = encode(&read_tree(&surface));
        let json = rawtext.to_pretty_json();

        html_element_by_id(&self.config.output_id)?.set_text_content(Some(&json));
        let preview = html_element_by_id(&self.config.preview_id)?;
        render_preview_into(&preview, &rawtext.rawtext)?;

        self.state.borrow_mut().json_output = json;
        Ok(())
    }
}

/// Record `tag` as the tag under edit and notify the view layer.
fn begin_edit(state: &RefCell<EditorState>, tag: HtmlElement) {
    let attrs = read_tag_attrs(&tag);
    // Release the borrow before calling out; the callback re-enters the editor.
    let callback = {
        let mut state = state.borrow_mut();
        state.session.begin_edit(tag.clone());
        state.on_edit.clone()
    };
    tracing::debug!(kind = attrs.kind_name(), "editing tag");

    let Some(callback) = callback else {
        return;
    };
    let result = attrs_to_js(&attrs)
        .map_err(JsValue::from)
        .and_then(|attrs| callback.call2(&JsValue::NULL, &tag, &attrs));
    if let Err(e) = result {
        tracing::warn!("onEdit callback failed: {:?}", e);
    }
}

/// Attribute bag as a plain JS object.
fn attrs_to_js(attrs: &TagAttrs) -> Result<JsValue, JsError> {
    let bag: BTreeMap<String, String> = attrs
        .to_bag()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    Ok(bag.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn catalog_entries(entries: Vec<(&str, &str)>) -> Result<JsValue, JsError> {
    let entries: Vec<JsCatalogEntry> = entries
        .into_iter()
        .map(|(id, name)| JsCatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();
    Ok(serde_wasm_bindgen::to_value(&entries)?)
}
