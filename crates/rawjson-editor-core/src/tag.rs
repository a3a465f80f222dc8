//! Functional tags: the inline, non-text widgets of the editable surface.
//!
//! On the DOM side a tag is a string attribute bag keyed by `type`. Inside
//! the core it is a [`TagAttrs`] variant; [`TagAttrs::from_bag`] and
//! [`TagAttrs::to_bag`] are the only crossing points. The attributes are the
//! single source of truth for both the label and the encoded component.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

/// String-keyed attribute bag as stored on a DOM element (`data-*`).
pub type AttributeBag = BTreeMap<SmolStr, String>;

/// Attribute key holding the tag kind.
pub const TYPE_ATTR: &str = "type";

/// Closed set of tag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Score,
    Selector,
    Translate,
    Conditional,
}

impl TagKind {
    pub const ALL: [TagKind; 4] = [
        TagKind::Score,
        TagKind::Selector,
        TagKind::Translate,
        TagKind::Conditional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Score => "score",
            TagKind::Selector => "selector",
            TagKind::Translate => "translate",
            TagKind::Conditional => "conditional",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "score" => Some(TagKind::Score),
            "selector" => Some(TagKind::Selector),
            "translate" => Some(TagKind::Translate),
            "conditional" => Some(TagKind::Conditional),
            _ => None,
        }
    }

    /// Attribute keys recognized for this kind.
    pub fn attr_keys(self) -> &'static [&'static str] {
        match self {
            TagKind::Score => &["name", "objective"],
            TagKind::Selector => &["selector"],
            TagKind::Translate => &["translate", "with"],
            TagKind::Conditional => &["condition", "then"],
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed attributes of one tag.
///
/// JSON-valued fields (`with`, `condition`, `then`) are kept as the raw
/// strings the user typed; they are only parsed when encoding or labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagAttrs {
    Score { name: String, objective: String },
    Selector { selector: String },
    Translate { translate: String, with: String },
    Conditional { condition: String, then: String },
    /// A tag whose `type` is outside the closed set. Labelled, never encoded.
    Unknown { kind: SmolStr },
}

impl TagAttrs {
    pub fn kind(&self) -> Option<TagKind> {
        match self {
            TagAttrs::Score { .. } => Some(TagKind::Score),
            TagAttrs::Selector { .. } => Some(TagKind::Selector),
            TagAttrs::Translate { .. } => Some(TagKind::Translate),
            TagAttrs::Conditional { .. } => Some(TagKind::Conditional),
            TagAttrs::Unknown { .. } => None,
        }
    }

    /// The `type` attribute value.
    pub fn kind_name(&self) -> &str {
        match self {
            TagAttrs::Unknown { kind } => kind,
            other => other.kind().map(TagKind::as_str).unwrap_or_default(),
        }
    }

    /// Payload of a freshly inserted tag.
    pub fn default_for(kind: TagKind) -> Self {
        match kind {
            TagKind::Score => TagAttrs::Score {
                name: "@p".into(),
                objective: "score".into(),
            },
            TagKind::Selector => TagAttrs::Selector {
                selector: "@p".into(),
            },
            TagKind::Translate => TagAttrs::Translate {
                translate: "key.example".into(),
                with: r#"[{"text":"example"}]"#.into(),
            },
            TagKind::Conditional => TagAttrs::Conditional {
                condition: r#"{"selector":"@p"}"#.into(),
                then: r#"[{"text":"Success!"}]"#.into(),
            },
        }
    }

    /// Map an attribute bag onto the typed form. Missing keys become "".
    pub fn from_bag(bag: &AttributeBag) -> Self {
        let get = |key: &str| bag.get(key).cloned().unwrap_or_default();
        let kind = bag.get(TYPE_ATTR).map(String::as_str).unwrap_or_default();
        match TagKind::parse(kind) {
            Some(kind) => Self::from_fields(kind, get),
            None => TagAttrs::Unknown { kind: kind.into() },
        }
    }

    /// Build the typed form of `kind` from a field lookup.
    ///
    /// Used both at the DOM boundary and when applying an edit form.
    pub fn from_fields(kind: TagKind, mut get: impl FnMut(&str) -> String) -> Self {
        match kind {
            TagKind::Score => TagAttrs::Score {
                name: get("name"),
                objective: get("objective"),
            },
            TagKind::Selector => TagAttrs::Selector {
                selector: get("selector"),
            },
            TagKind::Translate => TagAttrs::Translate {
                translate: get("translate"),
                with: get("with"),
            },
            TagKind::Conditional => TagAttrs::Conditional {
                condition: get("condition"),
                then: get("then"),
            },
        }
    }

    /// Flatten into an attribute bag, including the `type` key.
    pub fn to_bag(&self) -> AttributeBag {
        let mut bag = AttributeBag::new();
        bag.insert(TYPE_ATTR.into(), self.kind_name().to_string());
        let mut put = |k: &str, v: &String| {
            bag.insert(k.into(), v.clone());
        };
        match self {
            TagAttrs::Score { name, objective } => {
                put("name", name);
                put("objective", objective);
            }
            TagAttrs::Selector { selector } => put("selector", selector),
            TagAttrs::Translate { translate, with } => {
                put("translate", translate);
                put("with", with);
            }
            TagAttrs::Conditional { condition, then } => {
                put("condition", condition);
                put("then", then);
            }
            TagAttrs::Unknown { .. } => {}
        }
        bag
    }
}
