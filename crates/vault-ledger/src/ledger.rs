//! Identity & dedup ledger, rebuilt from the persisted store at startup.

use std::collections::HashSet;
use std::io::{BufRead, BufReader};
use std::path::Path;
use vault_core::{PersistedRecord, RecordIdentity, Result};

/// Identities already persisted plus the next id to hand out.
#[derive(Debug, Clone)]
pub struct Ledger {
    next_id: u64,
    seen: HashSet<String>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self { next_id: 1, seen: HashSet::new() }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay a JSONL store. Lines that fail to parse are logged and skipped;
    /// only read errors from the underlying reader are returned.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut ledger = Self::new();
        let mut skipped = 0usize;
        for (idx, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            match serde_json::from_slice::<PersistedRecord>(&line) {
                Ok(record) => {
                    if !ledger.replay(&record) {
                        skipped += 1;
                        tracing::warn!(line = idx + 1, id = record.id, "skipping store line with exhausted id");
                    }
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(line = idx + 1, error = %e, "skipping corrupted store line");
                }
            }
        }
        tracing::debug!(identities = ledger.len(), next_id = ledger.next_id, skipped, "ledger rebuilt");
        Ok(ledger)
    }

    /// Rebuild from the store at `path`. A store that does not exist yet is empty.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::File::open(path) {
            Ok(file) => Self::load(BufReader::new(file)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no existing store, starting empty");
                Ok(Self::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Account for a record that is already persisted. A record whose id
    /// leaves no successor is refused and the ledger is left untouched.
    pub fn replay(&mut self, record: &PersistedRecord) -> bool {
        let Some(successor) = record.id.checked_add(1) else {
            return false;
        };
        self.seen.insert(record.identity().key());
        self.next_id = self.next_id.max(successor);
        true
    }

    pub fn contains(&self, identity: &RecordIdentity) -> bool {
        self.seen.contains(&identity.key())
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Admit a novel identity, consuming and returning the next id.
    /// Returns `None` if the identity has been seen before.
    pub fn admit(&mut self, identity: &RecordIdentity) -> Option<u64> {
        if !self.seen.insert(identity.key()) {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
