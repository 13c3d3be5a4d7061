//! Raw credential line parsing: protocol stripping, normalization, tokenization.

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{classify_shape, normalize, strip_protocol, unify_delimiters, LineShape};
pub use tokenizer::tokenize;

use vault_core::RecordIdentity;

/// Pre-pass applied to every raw line: strip the URL scheme, then trim.
/// Returns `None` for lines that end up empty.
pub fn prepare(raw: &str) -> Option<String> {
    let stripped = strip_protocol(raw);
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Full line pipeline: prepare → normalize → tokenize.
pub fn parse_line(raw: &str) -> Option<RecordIdentity> {
    let line = prepare(raw)?;
    let normalized = normalize(&line);
    let identity = tokenize(&normalized);
    if identity.is_none() {
        tracing::trace!(line = %normalized, "malformed line");
    }
    identity
}
