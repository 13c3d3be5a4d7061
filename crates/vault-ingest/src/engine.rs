//! Ingestion engine — parse, classify, dedup and persist one line at a time.

use std::sync::{Mutex, MutexGuard, PoisonError};
use vault_classifier::{classify, CategoryTable};
use vault_core::{PersistedRecord, Result, SourceMeta};
use vault_ledger::{build_record, Ledger, RecordSink};

/// What happened to a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Novel identity, persisted under a fresh id.
    Admitted(PersistedRecord),
    /// Identity already in the ledger.
    Duplicate,
    /// Empty or malformed line.
    Skipped,
}

struct State<S> {
    ledger: Ledger,
    sink: S,
}

/// Parsing and classification run lock-free on the caller's thread; ledger
/// admission and the sink write happen together under one mutex.
pub struct Engine<S: RecordSink> {
    categories: CategoryTable,
    state: Mutex<State<S>>,
}

impl<S: RecordSink> Engine<S> {
    pub fn new(categories: CategoryTable, ledger: Ledger, sink: S) -> Self {
        Self {
            categories,
            state: Mutex::new(State { ledger, sink }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one raw line through the whole pipeline.
    ///
    /// The ledger only records the identity once the sink accepted the record,
    /// so a failed write neither burns an id nor hides the line from a retry.
    pub fn ingest_line(&self, raw: &str, meta: &SourceMeta) -> Result<LineOutcome> {
        let Some(identity) = vault_parser::parse_line(raw) else {
            return Ok(LineOutcome::Skipped);
        };
        let category = classify(&identity.url, &identity.username, &self.categories).to_string();

        let mut state = self.lock();
        if state.ledger.contains(&identity) {
            return Ok(LineOutcome::Duplicate);
        }
        let id = state.ledger.next_id();
        let record = build_record(identity, meta, id, category);
        state.sink.append(&record)?;
        let admitted = state.ledger.admit(&record.identity());
        debug_assert_eq!(admitted, Some(id));
        Ok(LineOutcome::Admitted(record))
    }

    /// The new record, if the line parsed and its identity was novel.
    pub fn process_line(&self, raw: &str, meta: &SourceMeta) -> Result<Option<PersistedRecord>> {
        match self.ingest_line(raw, meta)? {
            LineOutcome::Admitted(record) => Ok(Some(record)),
            LineOutcome::Duplicate | LineOutcome::Skipped => Ok(None),
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.lock().sink.flush()
    }

    /// Identities persisted so far, including those replayed at startup.
    pub fn known_identities(&self) -> usize {
        self.lock().ledger.len()
    }

    pub fn next_id(&self) -> u64 {
        self.lock().ledger.next_id()
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn into_sink(self) -> S {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner).sink
    }
}
