//! Credential vault ingestion — the `process_line` engine and the file-level
//! collaborators around it.
//!
//! Flow per line:
//! 1. Strip URL scheme, trim, normalize, tokenize (`vault-parser`)
//! 2. Classify against the category table (`vault-classifier`)
//! 3. Admit through the ledger and append to the store (`vault-ledger`)

pub mod engine;
pub mod ingestor;
pub mod scanner;
pub mod shutdown;

pub use engine::{Engine, LineOutcome};
pub use ingestor::{BatchReport, FileIngestor, Ingestor};
pub use scanner::{file_timestamp, scan_sources, SourceFile};
pub use shutdown::Shutdown;
