use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Category table error ({path}): {reason}")]
    CategoryTable { path: String, reason: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VaultError {
    pub fn category_table(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::CategoryTable { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
