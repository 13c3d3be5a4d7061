//! Shared data model, configuration and errors for the credential vault.

pub mod config;
pub mod error;
pub mod record;

pub use config::VaultConfig;
pub use error::{Result, VaultError};
pub use record::{PersistedRecord, RecordIdentity, SourceMeta, DELIMITER};
