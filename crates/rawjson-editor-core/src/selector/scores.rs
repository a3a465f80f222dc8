//! `scores` sub-grammar: `{objective=value,...}`.
//!
//! The codec keeps values opaque. [`ScoreMatch`] is the edit-layer reading
//! of a value as an exact score, a range, or a negation.

use std::fmt;

use super::params::ParamMap;
use super::scan::{split_pair, split_top_level};

/// Parse a `scores` value. Anything but a `{...}` object yields an empty map.
pub fn parse_scores(input: &str) -> ParamMap {
    let input = input.trim();
    let mut scores = ParamMap::new();
    let Some(body) = input.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
        return scores;
    };
    for segment in split_top_level(body) {
        let (objective, value) = split_pair(segment);
        if !objective.is_empty() && !value.is_empty() {
            scores.insert(objective, value);
        }
    }
    scores
}

/// Build a `scores` value, or an empty string when there is nothing to emit.
pub fn build_scores(scores: &ParamMap) -> String {
    let kept: ParamMap = scores
        .iter()
        .filter(|(k, v)| !k.is_empty() && !v.trim().is_empty())
        .collect();
    if kept.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", kept.join_pairs())
    }
}

/// Edit-layer interpretation of a score value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreMatch {
    /// `5`
    Exact(i32),
    /// `1..5`, `1..`, `..5`
    Range { min: Option<i32>, max: Option<i32> },
    /// `!5`, `!1..5`
    Not(Box<ScoreMatch>),
}

impl ScoreMatch {
    /// Read a score value, or `None` if it is not a valid match expression.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(rest) = value.strip_prefix('!') {
            let inner = Self::parse(rest)?;
            if matches!(inner, ScoreMatch::Not(_)) {
                return None;
            }
            return Some(ScoreMatch::Not(Box::new(inner)));
        }

        if let Some((min, max)) = value.split_once("..") {
            let min = parse_bound(min)?;
            let max = parse_bound(max)?;
            if min.is_none() && max.is_none() {
                return None;
            }
            return Some(ScoreMatch::Range { min, max });
        }

        value.parse().ok().map(ScoreMatch::Exact)
    }

    /// Whether a concrete score satisfies this match.
    pub fn matches(&self, score: i32) -> bool {
        match self {
            ScoreMatch::Exact(v) => score == *v,
            ScoreMatch::Range { min, max } => {
                min.is_none_or(|m| score >= m) && max.is_none_or(|m| score <= m)
            }
            ScoreMatch::Not(inner) => !inner.matches(score),
        }
    }
}

fn parse_bound(s: &str) -> Option<Option<i32>> {
    let s = s.trim();
    if s.is_empty() {
        Some(None)
    } else {
        s.parse().ok().map(Some)
    }
}

impl fmt::Display for ScoreMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreMatch::Exact(v) => write!(f, "{v}"),
            ScoreMatch::Range { min, max } => {
                if let Some(min) = min {
                    write!(f, "{min}")?;
                }
                f.write_str("..")?;
                if let Some(max) = max {
                    write!(f, "{max}")?;
                }
                Ok(())
            }
            ScoreMatch::Not(inner) => write!(f, "!{inner}"),
        }
    }
}
