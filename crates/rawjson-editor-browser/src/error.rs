//! Browser-side error types.

use wasm_bindgen::JsValue;

/// Failure talking to the DOM.
#[derive(thiserror::Error, Debug)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{0} is not an HTML element")]
    NotHtml(String),

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Failure loading an item or slot catalog.
///
/// Callers turn this into an empty catalog; it is never shown to the user.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("fetching {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} is not a valid catalog: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub(crate) fn fetch(url: &str, value: impl std::fmt::Debug) -> Self {
        CatalogError::Fetch {
            url: url.to_string(),
            message: format!("{value:?}"),
        }
    }
}
