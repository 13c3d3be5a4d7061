//! Batch ingestion over source files, with per-process "already seen" tracking.

use crate::engine::{Engine, LineOutcome};
use crate::scanner::{file_timestamp, scan_sources, SourceFile};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use vault_classifier::CategoryTable;
use vault_core::{Result, SourceMeta, VaultConfig};
use vault_ledger::{JsonlSink, Ledger, RecordSink};

/// Counters for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files read in this batch.
    pub files: usize,
    /// Files that could not be opened.
    pub unreadable: usize,
    pub lines: usize,
    /// Empty or malformed lines.
    pub skipped: usize,
    pub duplicates: usize,
    pub admitted: usize,
}

impl BatchReport {
    fn record(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Admitted(_) => self.admitted += 1,
            LineOutcome::Duplicate => self.duplicates += 1,
            LineOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files == 0 && self.unreadable == 0
    }
}

/// Ingestor writing to the on-disk JSONL store.
pub type FileIngestor = Ingestor<JsonlSink<BufWriter<File>>>;

pub struct Ingestor<S: RecordSink> {
    engine: Engine<S>,
    root: PathBuf,
    extension: String,
    processed: HashSet<PathBuf>,
}

impl FileIngestor {
    /// Startup sequence: category table (fatal on error), ledger replay, store
    /// opened for appending.
    pub fn open(config: &VaultConfig) -> Result<Self> {
        config.validate()?;
        let categories = CategoryTable::load(&config.category_path)?;
        let ledger = Ledger::load_path(&config.output_path)?;
        tracing::info!(
            store = %config.output_path.display(),
            records = ledger.len(),
            next_id = ledger.next_id(),
            "ledger ready"
        );
        let sink = JsonlSink::open_append(&config.output_path)?;
        Ok(Self::new(
            Engine::new(categories, ledger, sink),
            config.input_dir.clone(),
            config.extension.clone(),
        ))
    }
}

impl<S: RecordSink> Ingestor<S> {
    pub fn new(engine: Engine<S>, root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            engine,
            root: root.into(),
            extension: extension.into(),
            processed: HashSet::new(),
        }
    }

    pub fn engine(&self) -> &Engine<S> {
        &self.engine
    }

    pub fn into_engine(self) -> Engine<S> {
        self.engine
    }

    /// Scan the input directory and ingest files not seen by this process yet.
    pub fn poll(&mut self) -> Result<BatchReport> {
        let pending: Vec<SourceFile> = scan_sources(&self.root, &self.extension)
            .into_iter()
            .filter(|f| !self.processed.contains(&f.path))
            .collect();
        self.run_batch(&pending)
    }

    /// Ingest `files` in order. A file whose lines were all handed to the
    /// engine, or that cannot be opened, is not read again by this ingestor.
    pub fn run_batch(&mut self, files: &[SourceFile]) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        for file in files {
            if self.processed.contains(&file.path) {
                continue;
            }
            match File::open(&file.path) {
                Ok(handle) => {
                    tracing::info!(path = %file.path.display(), source = %file.source, "processing new file");
                    let meta = SourceMeta::new(&file.source, file_timestamp(&file.path));
                    self.ingest_reader(BufReader::new(handle), &meta, &mut report)?;
                    report.files += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %file.path.display(), error = %e, "cannot open source file, skipping");
                    report.unreadable += 1;
                }
            }
            self.processed.insert(file.path.clone());
        }

        if !report.is_empty() {
            self.engine.flush()?;
            tracing::info!(
                new_entries = report.admitted,
                duplicates = report.duplicates,
                skipped = report.skipped,
                total_entries = self.engine.known_identities(),
                "output updated"
            );
        }
        Ok(report)
    }

    /// Feed every line of `reader` to the engine. A read error ends this
    /// source with a warning; only sink failures are returned.
    pub fn ingest_reader<R: BufRead>(
        &self,
        reader: R,
        meta: &SourceMeta,
        report: &mut BatchReport,
    ) -> Result<()> {
        for line in reader.split(b'\n') {
            let line = match line {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(source = %meta.source, error = %e, "read error, abandoning rest of source");
                    break;
                }
            };
            let raw = String::from_utf8_lossy(&line);
            let outcome = self.engine.ingest_line(&raw, meta)?;
            report.record(&outcome);
        }
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.engine.flush()
    }
}
