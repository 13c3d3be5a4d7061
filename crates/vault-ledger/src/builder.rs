use vault_core::{PersistedRecord, RecordIdentity, SourceMeta};

/// Assemble a persistable record. Inputs are already validated upstream.
pub fn build_record(
    identity: RecordIdentity,
    meta: &SourceMeta,
    id: u64,
    category: impl Into<String>,
) -> PersistedRecord {
    let RecordIdentity { url, username, password } = identity;
    PersistedRecord {
        id,
        url,
        username,
        password,
        source: meta.source.clone(),
        timestamp: meta.timestamp.clone(),
        category: category.into(),
    }
}
