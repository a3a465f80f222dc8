//! Item and inventory-slot lookup tables.
//!
//! Both are plain `id → display name` maps loaded from JSON. A missing or
//! broken catalog is just an empty one; nothing here is fatal.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Like [`Catalog::from_json`], but logs and returns an empty catalog on error.
    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            tracing::warn!("failed to parse catalog: {err}");
            Self::default()
        })
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(id.into(), name.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Display name for `id`, falling back to the id itself.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Case-insensitive substring match on id or display name.
    pub fn search(&self, query: &str) -> Vec<(&str, &str)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.iter().collect();
        }
        self.iter()
            .filter(|(id, name)| {
                id.to_lowercase().contains(&query) || name.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Both catalogs the hasitem editor needs.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub items: Catalog,
    pub slots: Catalog,
}
