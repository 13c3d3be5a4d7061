use crate::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Directory polled for source files.
    pub input_dir: PathBuf,
    /// Append-only JSONL store.
    pub output_path: PathBuf,
    /// Category table (JSON).
    pub category_path: PathBuf,
    pub poll_interval_secs: u64,
    /// Extension of source files, without the dot.
    pub extension: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            input_dir: "../directory-of-your-extracted-data/".into(),
            output_path: "./all-parsed-data.json".into(),
            category_path: "./category.json".into(),
            poll_interval_secs: 5,
            extension: "txt".into(),
        }
    }
}

impl VaultConfig {
    /// Load from a JSON file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| VaultError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| VaultError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(VaultError::Config("poll_interval_secs must be positive".into()));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(VaultError::Config(format!(
                "extension must be non-empty and without a leading dot, got {:?}",
                self.extension
            )));
        }
        Ok(())
    }
}
