//! Simplified live preview of encoded components.

use crate::component::RawTextComponent;
use crate::label::CONDITIONAL_SENTINEL_LABEL;

/// One styled run of preview output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSpan {
    pub text: String,
    /// CSS class for non-text components.
    pub class: Option<&'static str>,
}

/// Render components as preview spans, one per component.
pub fn render_preview(components: &[RawTextComponent]) -> Vec<PreviewSpan> {
    components.iter().map(preview_span).collect()
}

fn preview_span(component: &RawTextComponent) -> PreviewSpan {
    let (text, class) = match component {
        RawTextComponent::Text { text } => (text.clone(), None),
        RawTextComponent::Score { score } => (
            format!("[{}:{}]", score.name, score.objective),
            Some("text-red-400"),
        ),
        RawTextComponent::Selector { selector } => (format!("[{selector}]"), Some("text-green-400")),
        RawTextComponent::Translate { .. } if component.as_conditional().is_some() => (
            CONDITIONAL_SENTINEL_LABEL.to_string(),
            Some("text-purple-400"),
        ),
        RawTextComponent::Translate { translate, .. } => {
            (format!("[t:{translate}]"), Some("text-yellow-400"))
        }
    };
    PreviewSpan { text, class }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_preview_spans() {
        let spans = render_preview(&[
            RawTextComponent::text("Hello "),
            RawTextComponent::score("@p", "coins"),
            RawTextComponent::selector("@a"),
            RawTextComponent::translate("k", vec![]),
            RawTextComponent::conditional(json!({"selector": "@p"}), vec![]),
        ]);
        let rendered: Vec<_> = spans.iter().map(|s| (s.text.as_str(), s.class)).collect();
        assert_eq!(
            rendered,
            vec![
                ("Hello ", None),
                ("[@p:coins]", Some("text-red-400")),
                ("[@a]", Some("text-green-400")),
                ("[t:k]", Some("text-yellow-400")),
                ("[IF...THEN...]", Some("text-purple-400")),
            ]
        );
    }
}
