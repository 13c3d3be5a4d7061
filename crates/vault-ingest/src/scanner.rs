//! Source discovery under the input directory.

use std::fs;
use std::path::{Path, PathBuf};

/// Timestamp recorded when the origin file's mtime cannot be read.
pub const UNKNOWN_TIMESTAMP: &str = "unknown";

/// A file to ingest and the source unit it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Name of the containing directory.
    pub source: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let source = source_label(&path);
        Self { path, source }
    }
}

/// Name of the directory a file sits in.
pub fn source_label(path: &Path) -> String {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    if let Some(name) = parent.file_name() {
        return name.to_string_lossy().into_owned();
    }
    // `.`, `..` or an empty parent: resolve to get a real name.
    fs::canonicalize(if parent.as_os_str().is_empty() { Path::new(".") } else { parent })
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| parent.display().to_string())
}

/// Local-time mtime as `%Y-%m-%d %H:%M:%S`, or [`UNKNOWN_TIMESTAMP`].
pub fn file_timestamp(path: &Path) -> String {
    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(mtime) => chrono::DateTime::<chrono::Local>::from(mtime)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read modification time");
            UNKNOWN_TIMESTAMP.to_string()
        }
    }
}

fn sorted_entries(dir: &Path) -> Option<Vec<PathBuf>> {
    match fs::read_dir(dir) {
        Ok(entries) => {
            let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
            paths.sort();
            Some(paths)
        }
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot read directory");
            None
        }
    }
}

/// A subdirectory is a source unit only if it holds exactly one regular file.
pub fn is_single_file_dir(dir: &Path) -> bool {
    let Some(entries) = sorted_entries(dir) else {
        return false;
    };
    entries.iter().filter(|p| p.is_file()).take(2).count() == 1
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}

fn scan_dir(dir: &Path, extension: &str, out: &mut Vec<SourceFile>) {
    let Some(entries) = sorted_entries(dir) else {
        return;
    };
    for path in entries {
        if path.is_dir() {
            if is_single_file_dir(&path) {
                scan_dir(&path, extension, out);
            } else {
                tracing::debug!(dir = %path.display(), "skipping directory without exactly one file");
            }
        } else if path.is_file() && has_extension(&path, extension) {
            out.push(SourceFile::new(path));
        }
    }
}

/// All source files under `root`, in path order.
pub fn scan_sources(root: impl AsRef<Path>, extension: &str) -> Vec<SourceFile> {
    let mut out = Vec::new();
    scan_dir(root.as_ref(), extension, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_scan_top_level_and_single_file_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("dumps");
        touch(&root.join("a.txt"), "x");
        touch(&root.join("notes.md"), "x");
        touch(&root.join("solo").join("creds.txt"), "x");
        touch(&root.join("multi").join("one.txt"), "x");
        touch(&root.join("multi").join("two.txt"), "x");

        let found = scan_sources(&root, "txt");
        let names: Vec<_> = found
            .iter()
            .map(|f| (f.source.as_str(), f.path.file_name().unwrap().to_str().unwrap()))
            .collect();
        assert_eq!(names, [("dumps", "a.txt"), ("solo", "creds.txt")]);
    }

    #[test]
    fn test_scan_nested_single_file_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("in");
        touch(&root.join("outer").join("readme.txt"), "x");
        touch(&root.join("outer").join("inner").join("deep.txt"), "x");
        let found = scan_sources(&root, "txt");
        let sources: Vec<_> = found.iter().map(|f| f.source.as_str()).collect();
        assert_eq!(sources, ["inner", "outer"]);
    }

    #[test]
    fn test_single_file_dir_ignores_subdirs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("d");
        touch(&dir.join("only.txt"), "x");
        fs::create_dir_all(dir.join("sub")).unwrap();
        assert!(is_single_file_dir(&dir));
        fs::write(dir.join("second.log"), "x").unwrap();
        assert!(!is_single_file_dir(&dir));
    }

    #[test]
    fn test_scan_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(scan_sources(tmp.path().join("absent"), "txt").is_empty());
    }

    #[test]
    fn test_file_timestamp_format() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("f.txt");
        touch(&path, "x");
        let ts = file_timestamp(&path);
        assert_eq!(ts.len(), "2024-01-01 00:00:00".len());
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, "%Y-%m-%d %H:%M:%S").is_ok());
        assert_eq!(file_timestamp(&tmp.path().join("missing")), UNKNOWN_TIMESTAMP);
    }

    #[test]
    fn test_source_label() {
        assert_eq!(source_label(Path::new("/data/batch-1/x.txt")), "batch-1");
    }
}
