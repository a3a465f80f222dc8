//! Fetching the item and slot catalogs.

use rawjson_editor_core::{Catalog, Catalogs};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::CatalogError;

/// Fetch and parse one catalog.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let window = web_sys::window().ok_or_else(|| CatalogError::fetch(url, "no window"))?;

    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| CatalogError::fetch(url, e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| CatalogError::fetch(url, "not a Response"))?;

    if !response.ok() {
        return Err(CatalogError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(|e| CatalogError::fetch(url, e))?)
        .await
        .map_err(|e| CatalogError::fetch(url, e))?
        .as_string()
        .unwrap_or_default();

    Catalog::from_json(&text).map_err(|source| CatalogError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Fetch a catalog, logging and substituting an empty one on any failure.
pub async fn fetch_catalog_or_empty(url: &str) -> Catalog {
    match fetch_catalog(url).await {
        Ok(catalog) => {
            tracing::debug!(url, entries = catalog.len(), "catalog loaded");
            catalog
        }
        Err(e) => {
            tracing::warn!("{e}; using an empty catalog");
            Catalog::default()
        }
    }
}

/// Load both catalogs. Never fails.
pub async fn load_catalogs(items_url: &str, slots_url: &str) -> Catalogs {
    Catalogs {
        items: fetch_catalog_or_empty(items_url).await,
        slots: fetch_catalog_or_empty(slots_url).await,
    }
}
