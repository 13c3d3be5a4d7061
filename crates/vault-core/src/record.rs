//! Credential identity and the record persisted as one JSONL line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical field delimiter of a normalized line.
pub const DELIMITER: char = ':';

/// Dedup key: the tokenized (url, username, password) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordIdentity {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl RecordIdentity {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// `url:username:password`. Unambiguous because url and username never
    /// contain the delimiter after tokenization.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{DELIMITER}{}{DELIMITER}{}", self.url, self.username, self.password)
    }
}

/// Where a raw line came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceMeta {
    /// Name of the directory the line was read from.
    pub source: String,
    /// Modification time of the origin file.
    pub timestamp: String,
}

impl SourceMeta {
    pub fn new(source: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// One line of the append-only store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub id: u64,
    pub url: String,
    pub username: String,
    pub password: String,
    pub source: String,
    pub timestamp: String,
    pub category: String,
}

impl PersistedRecord {
    pub fn identity(&self) -> RecordIdentity {
        RecordIdentity::new(&self.url, &self.username, &self.password)
    }

    /// Serialize as a single JSONL line (no trailing newline).
    pub fn to_json_line(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json_line(line: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}
