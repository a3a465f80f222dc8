//! DOM-backed modal stack.
//!
//! Each modal is a container plus a backdrop appended to the modal root.
//! Only the top modal is visible; the ones below carry the `hidden` class.
//! Clicking the backdrop or any `.close-modal-btn` closes that modal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use rawjson_editor_core::{ModalHandle, ModalPresenter, ModalStack};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::error::DomError;

pub const HIDDEN_CLASS: &str = "hidden";
pub const CLOSE_BUTTON_SELECTOR: &str = ".close-modal-btn";

const CONTAINER_CLASS: &str = "fixed inset-0 z-50 flex items-center justify-center p-4";
const BACKDROP_CLASS: &str = "fixed inset-0 bg-black bg-opacity-50";

struct DomModal {
    container: HtmlElement,
    backdrop: HtmlElement,
    _listeners: Vec<EventListener>,
}

impl DomModal {
    fn set_hidden(&self, hidden: bool) {
        for el in [&self.container, &self.backdrop] {
            let classes = el.class_list();
            let result = if hidden {
                classes.add_1(HIDDEN_CLASS)
            } else {
                classes.remove_1(HIDDEN_CLASS)
            };
            if let Err(e) = result {
                tracing::warn!("toggling modal visibility failed: {:?}", e);
            }
        }
    }

    fn remove(&self) {
        self.container.remove();
        self.backdrop.remove();
    }
}

type SharedStack = Rc<RefCell<ModalStack<DomModal>>>;

/// [`ModalPresenter`] over real DOM containers.
///
/// Cloning shares the same stack.
#[derive(Clone)]
pub struct DomModalStack {
    stack: SharedStack,
    root_id: Option<String>,
}

impl DomModalStack {
    /// Modals are appended to `#root_id`, or to `document.body` when `None`.
    pub fn new(root_id: Option<String>) -> Self {
        Self {
            stack: Rc::new(RefCell::new(ModalStack::new())),
            root_id,
        }
    }

    pub fn try_show(&self, content: &str) -> Result<ModalHandle, DomError> {
        let document = crate::document()?;
        let root = self.root(&document)?;

        let depth = self.stack.borrow().len();
        let handle = self.stack.borrow().next_handle();
        let (z_container, z_backdrop) = ModalStack::<DomModal>::z_indices(depth);

        let container = create_div(&document, CONTAINER_CLASS, &format!("modal-container-{handle}"))?;
        container.style().set_property("z-index", &z_container.to_string())?;
        container.set_inner_html(content);
        root.append_child(&container)?;

        let backdrop = create_div(&document, BACKDROP_CLASS, &format!("modal-backdrop-{handle}"))?;
        backdrop.style().set_property("z-index", &z_backdrop.to_string())?;
        root.append_child(&backdrop)?;

        let mut listeners = vec![close_listener(&backdrop, Rc::downgrade(&self.stack), handle)];
        let buttons = container.query_selector_all(CLOSE_BUTTON_SELECTOR)?;
        for i in 0..buttons.length() {
            if let Some(button) = buttons.item(i) {
                listeners.push(close_listener(&button, Rc::downgrade(&self.stack), handle));
            }
        }

        let modal = DomModal {
            container,
            backdrop,
            _listeners: listeners,
        };

        let mut stack = self.stack.borrow_mut();
        if let Some(previous) = stack.top() {
            previous.set_hidden(true);
        }
        let pushed = stack.push(modal);
        debug_assert_eq!(pushed, handle);
        tracing::debug!(%handle, depth = depth + 1, "modal shown");
        Ok(handle)
    }

    /// Container element of the visible modal, for reading its form fields.
    pub fn top_container(&self) -> Option<HtmlElement> {
        self.stack.borrow().top().map(|modal| modal.container.clone())
    }

    pub fn top_handle(&self) -> Option<ModalHandle> {
        self.stack.borrow().top_handle()
    }

    /// Remove every modal.
    pub fn clear(&self) {
        let drained: Vec<DomModal> = self.stack.borrow_mut().drain().collect();
        for modal in &drained {
            modal.remove();
        }
    }

    fn root(&self, document: &Document) -> Result<Element, DomError> {
        match &self.root_id {
            Some(id) => document
                .get_element_by_id(id)
                .ok_or_else(|| DomError::MissingElement(id.clone())),
            None => document
                .body()
                .map(Element::from)
                .ok_or_else(|| DomError::MissingElement("body".into())),
        }
    }
}

impl ModalPresenter for DomModalStack {
    fn show(&mut self, content: &str) -> ModalHandle {
        match self.try_show(content) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!("failed to show modal: {e}");
                self.stack.borrow_mut().dead_handle()
            }
        }
    }

    fn hide(&mut self, handle: Option<ModalHandle>) {
        hide_in(&self.stack, handle);
    }

    fn depth(&self) -> usize {
        self.stack.borrow().len()
    }
}

fn hide_in(stack: &RefCell<ModalStack<DomModal>>, handle: Option<ModalHandle>) {
    let removed = stack.borrow_mut().remove(handle);
    let Some(modal) = removed else {
        tracing::trace!(?handle, "hide: no such modal");
        return;
    };
    modal.remove();
    if let Some(top) = stack.borrow().top() {
        top.set_hidden(false);
    }
    tracing::debug!(?handle, depth = stack.borrow().len(), "modal hidden");
}

/// Listener that closes `handle` on click.
///
/// The close is deferred to a microtask: removing the modal drops this
/// listener, which must not happen while it is running.
fn close_listener(
    target: &web_sys::EventTarget,
    stack: Weak<RefCell<ModalStack<DomModal>>>,
    handle: ModalHandle,
) -> EventListener {
    EventListener::new(target, "click", move |_| {
        let stack = stack.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(stack) = stack.upgrade() {
                hide_in(&stack, Some(handle));
            }
        });
    })
}

fn create_div(document: &Document, class: &str, id: &str) -> Result<HtmlElement, DomError> {
    let div: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(JsValue::from)?;
    div.set_class_name(class);
    div.set_id(id);
    Ok(div)
}
