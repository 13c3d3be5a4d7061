//! Append-only record sinks.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use vault_core::{PersistedRecord, Result};

/// Destination for admitted records. Callers serialize access.
pub trait RecordSink: Send {
    /// Append one complete record.
    fn append(&mut self, record: &PersistedRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// One JSON object per line.
pub struct JsonlSink<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Records appended through this sink.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonlSink<BufWriter<File>> {
    /// Open `path` for appending, creating it and its parent directory if needed.
    /// A store whose last line was cut off mid-write gets a newline first, so
    /// the next record starts on a line of its own.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new().create(true).read(true).append(true).open(path)?;
        if ends_unterminated(&mut file)? {
            tracing::warn!(path = %path.display(), "store ends in a partial line, sealing it");
            file.write_all(b"\n")?;
        }
        Ok(Self::new(BufWriter::new(file)))
    }
}

fn ends_unterminated(file: &mut File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl<W: Write + Send> RecordSink for JsonlSink<W> {
    fn append(&mut self, record: &PersistedRecord) -> Result<()> {
        let mut line = record.to_json_line()?;
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink, handy for tests and dry runs.
impl RecordSink for Vec<PersistedRecord> {
    fn append(&mut self, record: &PersistedRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
