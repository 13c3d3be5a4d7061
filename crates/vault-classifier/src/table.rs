//! Category table — ordered category name → domain substrings.

use serde::Deserialize;
use std::path::Path;
use vault_core::{Result, VaultError};

/// One category and the domain substrings that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub domains: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    domains: Vec<String>,
}

/// Categories in declaration order. Earlier categories win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(name, domains)| Category {
                    name: name.to_string(),
                    domains: domains.iter().map(|d| d.to_string()).collect(),
                })
                .collect(),
        )
    }

    /// Parse `{"<name>": {"domains": [...]}, ...}` keeping key order.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| VaultError::category_table(origin, e))?;

        let mut categories = Vec::with_capacity(map.len());
        for (name, value) in map {
            let entry: CategoryEntry = serde_json::from_value(value)
                .map_err(|e| VaultError::category_table(origin, format!("category {name:?}: {e}")))?;
            categories.push(Category { name, domains: entry.domains });
        }
        Ok(Self::new(categories))
    }

    /// Load from disk. Any failure is fatal to the caller.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|e| VaultError::category_table(&origin, e))?;
        let table = Self::from_json_str(&raw, &origin)?;
        tracing::info!(path = %origin, categories = table.len(), "loaded category table");
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
