//! rawjson-editor-core: DOM-free logic for the Bedrock RawJSON editor.
//!
//! This crate provides:
//! - `RawText` / `RawTextComponent` - the `{"rawtext": [...]}` wire model
//! - `EditorNode` - platform-independent view of the editable surface
//! - `encode` / `decode` - conversion between the two
//! - `TagAttrs` and `render_label` - functional tag payloads and their labels
//! - `Selector` plus the `hasitem` / `scores` sub-grammars
//! - `EditSession`, `ModalStack`, `Catalog` - state shared by the editors

pub mod catalog;
pub mod component;
pub mod conditional;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod label;
pub mod modal;
pub mod preview;
pub mod selector;
pub mod session;
pub mod tag;
pub mod tree;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, Catalogs};
pub use component::{CONDITIONAL_KEY, RawText, RawTextComponent, ScoreRef, conditional_parts};
pub use conditional::{ConditionKind, ConditionView, score_matcher_display};
pub use decode::{decode, decode_component, decode_components, parse_rawtext};
pub use encode::{CONDITIONAL_ERROR_TEXT, encode, encode_nodes, encode_tag, merge_text_runs};
pub use error::{AttrError, DecodeError};
pub use format::{FORMAT_CODES, FormatCode, FormatStyle, find_format_code};
pub use label::{CONDITIONAL_SENTINEL_LABEL, render_label};
pub use modal::{BASE_Z_INDEX, ModalHandle, ModalPresenter, ModalStack};
pub use preview::{PreviewSpan, render_preview};
pub use selector::{
    ARGUMENT_KEYS, HASITEM_KEYS, HasitemCondition, ParamMap, ScoreMatch, Selector, SelectorBase,
    build_hasitem, build_scores, display_selector, format_hasitem_display, parse_hasitem,
    parse_scores,
};
pub use session::{EditSession, SelectorDestination};
pub use smol_str::SmolStr;
pub use tag::{AttributeBag, TYPE_ATTR, TagAttrs, TagKind};
pub use tree::EditorNode;
