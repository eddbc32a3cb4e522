//! Size-rotated append-only file.
//!
//! Backups use numbered suffixes: the active file is `<path>`, the most recent
//! backup is `<path>.1`, the oldest kept is `<path>.<max_backups>`.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default rotation threshold (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of backups kept.
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Line-oriented writer that rotates its file once it grows past a threshold.
///
/// The handle is opened lazily on the first write. Writes from several
/// threads are serialized through an internal `Mutex`.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned or any file operation fails.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("writer lock poisoned: {e}")))?;

        if self.is_full() {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(handle) = file.as_mut() else {
            return Err(io::Error::other("trace file not open"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.max_bytes)
    }

    /// Shifts `<path>.N-1` to `<path>.N` down to `<path>` → `<path>.1`.
    ///
    /// The oldest backup falls off the end.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        fs::rename(&self.path, self.backup_path(1))
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("spans.json"));

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(&writer.path), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("spans.json"), 4, 2);

        for line in ["one", "two", "three", "four"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&writer.path), "four\n");
        assert_eq!(read(&writer.backup_path(1)), "three\n");
        assert_eq!(read(&writer.backup_path(2)), "two\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("spans.json"), 4, 0);

        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(read(&writer.path), "second\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("absent").join("spans.json"));
        assert!(writer.write_line("x").is_err());
    }
}
