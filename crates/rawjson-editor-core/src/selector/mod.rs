//! Entity selector codec: `@<base>[<key>=<value>,...]`.
//!
//! Parsing never fails. Unknown or missing bases fall back to `@p`, and
//! broken nesting degrades to a best-effort split where the unbalanced tail
//! stays attached to the last argument as one opaque value.
//!
//! - `hasitem`: nested object / array-of-objects sub-grammar
//! - `scores`: nested object sub-grammar with range values

pub mod hasitem;
pub mod params;
mod scan;
pub mod scores;

use std::fmt;

pub use hasitem::{HASITEM_KEYS, HasitemCondition, build_hasitem, format_hasitem_display, parse_hasitem};
pub use params::ParamMap;
pub use scores::{ScoreMatch, build_scores, parse_scores};

use scan::{find_matching, split_pair, split_top_level, unquote};

/// Selector arguments in the order the advanced selector form lists them.
pub const ARGUMENT_KEYS: [&str; 22] = [
    "type", "name", "c", "family", "x", "y", "z", "r", "rm", "rx", "rxm", "ry", "rym", "dx", "dy",
    "dz", "tag", "scores", "hasitem", "m", "lm", "l",
];

/// Target symbol following `@`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectorBase {
    /// Nearest player.
    #[default]
    P,
    /// Random player.
    R,
    /// All players.
    A,
    /// All entities.
    E,
    /// Executing entity.
    S,
    /// Nearest entity.
    N,
}

impl SelectorBase {
    pub const ALL: [SelectorBase; 6] = [
        SelectorBase::P,
        SelectorBase::R,
        SelectorBase::A,
        SelectorBase::E,
        SelectorBase::S,
        SelectorBase::N,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(SelectorBase::P),
            'r' => Some(SelectorBase::R),
            'a' => Some(SelectorBase::A),
            'e' => Some(SelectorBase::E),
            's' => Some(SelectorBase::S),
            'n' => Some(SelectorBase::N),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            SelectorBase::P => 'p',
            SelectorBase::R => 'r',
            SelectorBase::A => 'a',
            SelectorBase::E => 'e',
            SelectorBase::S => 's',
            SelectorBase::N => 'n',
        }
    }

    /// Parse a base given as a string (`"a"`), defaulting to `@p`.
    pub fn from_str_lossy(s: &str) -> Self {
        s.trim()
            .trim_start_matches('@')
            .chars()
            .next()
            .and_then(Self::from_char)
            .unwrap_or_default()
    }
}

impl fmt::Display for SelectorBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.as_char())
    }
}

/// Structured form of a selector string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub base: SelectorBase,
    pub params: ParamMap,
}

impl Selector {
    pub fn new(base: SelectorBase) -> Self {
        Self {
            base,
            params: ParamMap::new(),
        }
    }

    /// Builder-style argument insertion.
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Parse a selector string. Never fails; see module docs for fallbacks.
    pub fn parse(input: &str) -> Self {
        let base = input
            .strip_prefix('@')
            .and_then(|rest| rest.chars().next())
            .and_then(SelectorBase::from_char)
            .unwrap_or_default();

        let mut params = ParamMap::new();
        if let Some(body) = bracket_body(input) {
            for segment in split_top_level(body) {
                let (key, value) = split_pair(segment);
                if key.is_empty() {
                    continue;
                }
                params.insert(key, unquote(value));
            }
        }

        Self { base, params }
    }

    /// Collect the fields of the advanced selector form.
    ///
    /// Fields follow [`ARGUMENT_KEYS`] order regardless of input order; keys
    /// outside that list are appended afterwards. Blank fields are dropped.
    pub fn from_fields<'a>(
        base: SelectorBase,
        fields: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut known = ParamMap::new();
        let mut extra = ParamMap::new();
        for (key, value) in fields {
            if value.trim().is_empty() {
                continue;
            }
            if ARGUMENT_KEYS.contains(&key) {
                known.insert(key, value);
            } else {
                extra.insert(key, value);
            }
        }

        let mut params = ParamMap::new();
        for key in ARGUMENT_KEYS {
            if let Some(value) = known.get(key) {
                params.insert(key, value);
            }
        }
        params.extend(extra);

        Self { base, params }
    }

    /// True when the selector has no bracketed arguments.
    pub fn is_bare(&self) -> bool {
        self.params.iter().all(|(_, v)| v.trim().is_empty())
    }

    /// Serialize back to the selector string.
    ///
    /// Blank values are omitted. Values containing a space or comma, or
    /// already wrapped in double quotes, are quoted unless they belong to `hasitem`/`scores` or already look like a
    /// `{...}`/`[...]` structure.
    pub fn build(&self) -> String {
        let mut out = self.base.to_string();
        let mut first = true;
        for (key, value) in self.params.iter() {
            if value.trim().is_empty() {
                continue;
            }
            out.push(if first { '[' } else { ',' });
            first = false;
            out.push_str(key);
            out.push('=');
            if needs_quotes(key, value) {
                out.push('"');
                out.push_str(value);
                out.push('"');
            } else {
                out.push_str(value);
            }
        }
        if !first {
            out.push(']');
        }
        out
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

fn needs_quotes(key: &str, value: &str) -> bool {
    (value.contains(' ') || value.contains(',') || unquote(value) != value)
        && key != "hasitem"
        && key != "scores"
        && !is_structured(value)
}

fn is_structured(value: &str) -> bool {
    (value.starts_with('{') && value.ends_with('}'))
        || (value.starts_with('[') && value.ends_with(']'))
}

/// Text between the first `[` and its matching `]`.
///
/// Without a match, falls back to the last `]` after the opener, and then to
/// the rest of the input.
fn bracket_body(input: &str) -> Option<&str> {
    let open = input.find('[')?;
    let close = find_matching(input, open)
        .or_else(|| input.rfind(']').filter(|&idx| idx > open))
        .unwrap_or(input.len());
    Some(&input[open + 1..close])
}

/// Presentation form of a selector string for tag labels.
///
/// Re-parses an embedded `hasitem=` value and prints it with whitespace
/// normalized. The input string itself is not modified.
pub fn display_selector(selector: &str) -> String {
    const NEEDLE: &str = "hasitem=";

    let Some(pos) = selector.find(NEEDLE) else {
        return selector.to_string();
    };
    let value_start = pos + NEEDLE.len();
    let Some(end) = find_matching(selector, value_start) else {
        return selector.to_string();
    };

    let raw = &selector[value_start..=end];
    let formatted = format_hasitem_display(raw);
    tracing::trace!(raw, formatted = %formatted, "display_selector: formatted hasitem");

    let mut out = String::with_capacity(selector.len());
    out.push_str(&selector[..value_start]);
    out.push_str(&formatted);
    out.push_str(&selector[end + 1..]);
    out
}
