//! Preview element rendering.

use rawjson_editor_core::{RawTextComponent, render_preview};
use web_sys::Element;

use crate::error::DomError;

/// Replace the contents of `target` with one `<span>` per component.
pub fn render_preview_into(target: &Element, components: &[RawTextComponent]) -> Result<(), DomError> {
    let document = target.owner_document().ok_or(DomError::NoDocument)?;
    target.set_inner_html("");
    for span in render_preview(components) {
        let el = document.create_element("span")?;
        el.set_text_content(Some(&span.text));
        if let Some(class) = span.class {
            el.set_class_name(class);
        }
        target.append_child(&el)?;
    }
    Ok(())
}
