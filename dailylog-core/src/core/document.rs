//! The user's log file: reading, smart-saving, and cursor bookkeeping.
//!
//! [`LogDocument`] owns the smart-save gate and talks to disk only through
//! the [`LogStore`] trait, so the save logic is testable without touching
//! the filesystem and the filesystem binding stays in one place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{DailylogError, Result};
use crate::core::fingerprint::SaveGate;

/// Read/write access to the single log file.
///
/// Implementations must distinguish permission failures from other I/O
/// errors by returning [`DailylogError::PermissionDenied`].
pub trait LogStore {
    fn read(&self) -> Result<String>;
    fn write(&self, content: &str) -> Result<()>;
}

/// [`LogStore`] over a plain filesystem path.
#[derive(Debug, Clone)]
pub struct FsLogStore {
    path: PathBuf,
}

impl FsLogStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogStore for FsLogStore {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| classify_io(e, &self.path))
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| classify_io(e, &self.path))
    }
}

fn classify_io(err: io::Error, path: &Path) -> DailylogError {
    if err.kind() == io::ErrorKind::PermissionDenied {
        DailylogError::PermissionDenied(path.display().to_string())
    } else {
        DailylogError::Io(err)
    }
}

/// The open log file plus its save gate and last-known cursor index.
pub struct LogDocument<S: LogStore> {
    store: S,
    gate: SaveGate,
    cursor_index: Option<usize>,
}

impl<S: LogStore> LogDocument<S> {
    /// Wraps `store` with a dirty gate; call [`LogDocument::load`] before saving
    /// so an unchanged buffer is not rewritten on the first save.
    pub fn new(store: S) -> Self {
        Self {
            store,
            gate: SaveGate::new(),
            cursor_index: None,
        }
    }

    /// Reads the whole log and records its fingerprint as the on-disk state.
    pub fn load(&mut self) -> Result<String> {
        let content = self.store.read()?;
        self.gate.record(&content);
        Ok(content)
    }

    /// Writes `content` unless its fingerprint matches what was last confirmed
    /// on disk. Returns whether a write happened.
    pub fn smart_save(&mut self, content: &str) -> Result<bool> {
        self.save(content, false)
    }

    /// Writes `content` regardless of the gate. Returns `true` on success.
    pub fn force_save(&mut self, content: &str) -> Result<bool> {
        self.save(content, true)
    }

    fn save(&mut self, content: &str, force: bool) -> Result<bool> {
        if !force && !self.gate.should_save(content) {
            log::debug!("skipping save, content unchanged");
            return Ok(false);
        }
        self.store.write(content)?;
        // Only now is the content confirmed on disk; a failed write above
        // leaves the gate stale so the next save retries.
        self.gate.record(content);
        Ok(true)
    }

    /// Remembers where the cursor was when the view last saw the log.
    pub fn set_cursor_index(&mut self, index: usize) {
        self.cursor_index = Some(index);
    }

    /// The remembered cursor clamped to `text`, defaulting to the end.
    pub fn cursor_index(&self, text: &str) -> usize {
        let len = text.chars().count();
        match self.cursor_index {
            Some(index) if index < len => index,
            _ => len,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.gate.is_clean()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn document(content: &str) -> (LogDocument<FsLogStore>, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (LogDocument::new(FsLogStore::new(file.path())), file)
    }

    #[test]
    fn test_load_reads_file_and_cleans_gate() {
        let (mut doc, _file) = document("2024-03-09 walked the dog\n");
        assert!(!doc.is_clean());
        let content = doc.load().unwrap();
        assert_eq!(content, "2024-03-09 walked the dog\n");
        assert!(doc.is_clean());
    }

    #[test]
    fn test_second_save_of_identical_content_is_skipped() {
        let (mut doc, file) = document("");
        doc.load().unwrap();
        assert!(doc.smart_save("A").unwrap());
        assert!(!doc.smart_save("A").unwrap());
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "A");
    }

    #[test]
    fn test_loaded_content_is_not_rewritten() {
        let (mut doc, _file) = document("unchanged");
        let content = doc.load().unwrap();
        assert!(!doc.smart_save(&content).unwrap());
    }

    #[test]
    fn test_force_save_bypasses_gate() {
        let (mut doc, file) = document("");
        doc.load().unwrap();
        assert!(doc.smart_save("A").unwrap());
        assert!(doc.force_save("A").unwrap());
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "A");
    }

    #[test]
    fn test_missing_file_fails_load() {
        let doc_path = {
            let file = NamedTempFile::new().unwrap();
            file.path().to_path_buf()
        };
        let mut doc = LogDocument::new(FsLogStore::new(doc_path));
        assert!(doc.load().is_err());
    }

    #[test]
    fn test_cursor_clamps_to_text_end() {
        let (mut doc, _file) = document("");
        assert_eq!(doc.cursor_index("abc"), 3);
        doc.set_cursor_index(1);
        assert_eq!(doc.cursor_index("abc"), 1);
        doc.set_cursor_index(99);
        assert_eq!(doc.cursor_index("abc"), 3);
    }

    /// A store whose writes fail until released, for gate-retry semantics.
    struct FlakyStore {
        content: Cell<Option<String>>,
        fail_writes: Cell<bool>,
    }

    impl LogStore for &FlakyStore {
        fn read(&self) -> Result<String> {
            Ok(self.content.take().unwrap_or_default())
        }

        fn write(&self, content: &str) -> Result<()> {
            if self.fail_writes.get() {
                return Err(DailylogError::Io(io::Error::new(
                    io::ErrorKind::Other,
                    "disk full",
                )));
            }
            self.content.set(Some(content.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_leaves_gate_dirty_so_retry_writes() {
        let store = FlakyStore {
            content: Cell::new(Some(String::new())),
            fail_writes: Cell::new(true),
        };
        let mut doc = LogDocument::new(&store);

        assert!(doc.smart_save("entry").is_err());

        store.fail_writes.set(false);
        assert!(doc.smart_save("entry").unwrap());
        assert_eq!(store.content.take().unwrap(), "entry");
    }

    #[test]
    fn test_permission_denied_is_distinguished() {
        let err = classify_io(
            io::Error::new(io::ErrorKind::PermissionDenied, "nope"),
            Path::new("/var/log/daily.txt"),
        );
        assert!(matches!(err, DailylogError::PermissionDenied(_)));

        let err = classify_io(
            io::Error::new(io::ErrorKind::NotFound, "gone"),
            Path::new("/var/log/daily.txt"),
        );
        assert!(matches!(err, DailylogError::Io(_)));
    }
}
