//! Modal presentation contract and LIFO bookkeeping.
//!
//! Editors present their forms through [`ModalPresenter`]. Showing a modal
//! hides (but keeps) the one below it; hiding the top restores it.

use std::fmt;
use std::str::FromStr;

/// Base z-index of the first modal container.
pub const BASE_Z_INDEX: i32 = 1000;

/// Opaque id of a shown modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalHandle(u64);

impl fmt::Display for ModalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modal-{}", self.0)
    }
}

impl FromStr for ModalHandle {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("modal-").unwrap_or(s).parse().map(ModalHandle)
    }
}

/// Something that can stack modal dialogs.
pub trait ModalPresenter {
    /// Present `content` on top of the stack.
    fn show(&mut self, content: &str) -> ModalHandle;

    /// Hide a specific modal, or the top one when `handle` is `None`.
    /// Unknown handles are ignored.
    fn hide(&mut self, handle: Option<ModalHandle>);

    /// Number of modals currently stacked.
    fn depth(&self) -> usize;
}

/// Stack of modal entries. Only the top entry is meant to be visible.
#[derive(Debug)]
pub struct ModalStack<T> {
    entries: Vec<(ModalHandle, T)>,
    next_id: u64,
}

impl<T> Default for ModalStack<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> ModalStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the next pushed entry will receive.
    pub fn next_handle(&self) -> ModalHandle {
        ModalHandle(self.next_id)
    }

    /// Allocate a handle that is never pushed. Hiding it is a no-op.
    pub fn dead_handle(&mut self) -> ModalHandle {
        let handle = self.next_handle();
        self.next_id += 1;
        handle
    }

    pub fn push(&mut self, entry: T) -> ModalHandle {
        let handle = self.next_handle();
        self.next_id += 1;
        self.entries.push((handle, entry));
        handle
    }

    /// Remove a specific entry, or the top one when `handle` is `None`.
    pub fn remove(&mut self, handle: Option<ModalHandle>) -> Option<T> {
        let idx = match handle {
            Some(handle) => self.entries.iter().position(|(h, _)| *h == handle)?,
            None => self.entries.len().checked_sub(1)?,
        };
        Some(self.entries.remove(idx).1)
    }

    pub fn top(&self) -> Option<&T> {
        self.entries.last().map(|(_, entry)| entry)
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.entries.last_mut().map(|(_, entry)| entry)
    }

    pub fn top_handle(&self) -> Option<ModalHandle> {
        self.entries.last().map(|(handle, _)| *handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.entries.drain(..).rev().map(|(_, entry)| entry)
    }

    /// `(container, backdrop)` z-indices for a modal pushed at `depth`.
    pub fn z_indices(depth: usize) -> (i32, i32) {
        let container = BASE_Z_INDEX + 2 * depth as i32;
        (container, container - 1)
    }
}

/// In-memory presenter that only tracks modal contents.
impl ModalPresenter for ModalStack<String> {
    fn show(&mut self, content: &str) -> ModalHandle {
        self.push(content.to_string())
    }

    fn hide(&mut self, handle: Option<ModalHandle>) {
        if self.remove(handle).is_none() {
            tracing::debug!(?handle, "hide: no such modal");
        }
    }

    fn depth(&self) -> usize {
        self.len()
    }
}
