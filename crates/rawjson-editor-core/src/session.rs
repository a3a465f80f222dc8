//! Editing-session state owned by the orchestration layer.
//!
//! Generic over the tag handle so the browser can store DOM elements and
//! tests can store plain ids.

/// Where the selector editor should deliver its result.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectorDestination<'a, T> {
    /// Fill a form input (score name, conditional selector field).
    Input(String),
    /// Write into the tag currently being edited.
    Tag(&'a T),
}

/// The tag under edit plus any pending selector-editor target.
#[derive(Debug)]
pub struct EditSession<T> {
    editing: Option<T>,
    input_target: Option<String>,
}

impl<T> Default for EditSession<T> {
    fn default() -> Self {
        Self {
            editing: None,
            input_target: None,
        }
    }
}

impl<T> EditSession<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `tag`, returning whatever was being edited before.
    pub fn begin_edit(&mut self, tag: T) -> Option<T> {
        self.editing.replace(tag)
    }

    pub fn editing(&self) -> Option<&T> {
        self.editing.as_ref()
    }

    pub fn finish_edit(&mut self) -> Option<T> {
        self.editing.take()
    }

    /// Send the next selector-editor result to the input with this id.
    pub fn target_input(&mut self, input_id: impl Into<String>) {
        self.input_target = Some(input_id.into());
    }

    pub fn is_targeting_input(&self) -> bool {
        self.input_target.is_some()
    }

    /// Resolve where a built selector goes. An input target is consumed.
    pub fn route_selector(&mut self) -> Option<SelectorDestination<'_, T>> {
        if let Some(id) = self.input_target.take() {
            return Some(SelectorDestination::Input(id));
        }
        self.editing.as_ref().map(SelectorDestination::Tag)
    }

    /// Forget everything, e.g. after the surface was rebuilt by a decode.
    pub fn clear(&mut self) {
        self.editing = None;
        self.input_target = None;
    }
}
