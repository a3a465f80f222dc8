//! Clipboard handling: plain-text paste and copying the JSON output.

use crate::caret::insert_text_at_caret;
use crate::error::DomError;

/// Handle a paste into the editable surface as plain text only.
///
/// Rich content (including copied tags) is dropped; the text is inserted
/// at the caret. Returns whether anything was inserted.
pub fn paste_plain_text(evt: &web_sys::ClipboardEvent) -> Result<bool, DomError> {
    evt.prevent_default();
    let text = evt
        .clipboard_data()
        .and_then(|dt| dt.get_data("text/plain").ok())
        .filter(|text| !text.is_empty());

    match text {
        Some(text) => {
            insert_text_at_caret(&text)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Write `text` to the system clipboard via the async Clipboard API.
pub async fn write_clipboard_text(text: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let clipboard = window.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}
