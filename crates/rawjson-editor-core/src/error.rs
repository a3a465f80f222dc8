//! Error types for RawJSON conversion.
//!
//! Only decoding can fail outright. Everything else (malformed attribute
//! JSON, broken selector strings) degrades to a safe default and is
//! reported through `tracing` instead.

use miette::Diagnostic;

/// Fatal failure while decoding user-supplied RawJSON.
///
/// Returned before the editable surface is touched, so the caller can
/// surface the message and leave prior state as it was.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum DecodeError {
    /// Nothing to decode.
    #[error("no JSON input provided")]
    #[diagnostic(code(rawjson::decode::empty))]
    EmptyInput,

    /// The input is not JSON at all.
    #[error("invalid JSON: {0}")]
    #[diagnostic(code(rawjson::decode::json))]
    InvalidJson(#[from] serde_json::Error),

    /// Top-level object has no `rawtext` field.
    #[error("invalid RawJSON format: requires a 'rawtext' array")]
    #[diagnostic(
        code(rawjson::decode::missing_rawtext),
        help("wrap the components as {{\"rawtext\": [ ... ]}}")
    )]
    MissingRawtext,

    /// `rawtext` is present but is not an array.
    #[error("invalid RawJSON format: 'rawtext' must be an array, found {found}")]
    #[diagnostic(code(rawjson::decode::rawtext_type))]
    RawtextNotArray { found: &'static str },
}

/// Recoverable failure reading a JSON-valued tag attribute.
///
/// The encoder logs these and substitutes a default; they never reach
/// the caller of an encode pass.
#[derive(thiserror::Error, Debug)]
pub enum AttrError {
    #[error("attribute `{attr}` is not valid JSON: {source}")]
    Json {
        attr: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("attribute `{attr}` must be a JSON {expected}")]
    Shape {
        attr: &'static str,
        expected: &'static str,
    },
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
