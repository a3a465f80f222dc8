//! Depth-tracking scanner for the selector argument grammar.
//!
//! Selector values may nest `{...}` objects and `[...]` arrays of objects
//! (`hasitem=[{item=apple},{item=stick}]`), and plain values may be wrapped in
//! double quotes. Commas only separate arguments at depth zero outside quotes.
//!
//! Both entry points first honor quotes and, if a quote is left open at the
//! end of input, rescan with quotes treated as ordinary characters. Stray
//! closing delimiters never push the depth below zero.

/// Split `input` on commas that are not nested inside braces, brackets or quotes.
///
/// Segments are returned untrimmed. Empty input yields no segments.
pub(crate) fn split_top_level(input: &str) -> Vec<&str> {
    if input.is_empty() {
        return Vec::new();
    }
    match split_with(input, true) {
        Some(parts) => parts,
        None => split_with(input, false).unwrap_or_else(|| vec![input]),
    }
}

fn split_with(input: &str, honor_quotes: bool) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut start = 0;

    for (idx, ch) in input.char_indices() {
        match ch {
            '"' if honor_quotes => in_quote = !in_quote,
            _ if in_quote => {}
            '{' | '[' => depth += 1,
            '}' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    if in_quote {
        return None;
    }
    parts.push(&input[start..]);
    Some(parts)
}

/// Byte index of the delimiter closing the `[` or `{` at `open_idx`.
pub(crate) fn find_matching(input: &str, open_idx: usize) -> Option<usize> {
    match input[open_idx..].chars().next() {
        Some('[') | Some('{') => {}
        _ => return None,
    }
    find_matching_with(input, open_idx, true).or_else(|| find_matching_with(input, open_idx, false))
}

fn find_matching_with(input: &str, open_idx: usize, honor_quotes: bool) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_quote = false;

    for (offset, ch) in input[open_idx..].char_indices() {
        match ch {
            '"' if honor_quotes => in_quote = !in_quote,
            _ if in_quote => {}
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open_idx + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `key=value` at the first `=`, trimming both sides.
///
/// A segment without `=` yields the whole (trimmed) segment as key with an
/// empty value.
pub(crate) fn split_pair(segment: &str) -> (&str, &str) {
    match segment.split_once('=') {
        Some((k, v)) => (k.trim(), v.trim()),
        None => (segment.trim(), ""),
    }
}

/// Remove one pair of surrounding double quotes, if present.
pub(crate) fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Strip an optional leading `open` and trailing `close` delimiter.
pub(crate) fn strip_delims(value: &str, open: char, close: char) -> &str {
    let value = value.strip_prefix(open).unwrap_or(value);
    value.strip_suffix(close).unwrap_or(value)
}
