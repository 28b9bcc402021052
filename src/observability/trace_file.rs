//! Append-only span file with size-based rotation.
//!
//! Before each write the file size is checked; once it exceeds the limit the
//! file is shifted to `<name>.1`, older backups move up one slot, and the
//! oldest beyond the retention count is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_BACKUPS: usize = 3;

pub struct TraceFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl TraceFile {
    /// Opens lazily on first write with the default limits.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be rotated, opened, or written, or if the
    /// lock was poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes) {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::other("trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup(&self, slot: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{slot}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for slot in (1..self.backups).rev() {
            let from = self.backup(slot);
            if from.exists() {
                fs::rename(&from, self.backup(slot + 1))?;
            }
        }
        fs::rename(&self.path, self.backup(1))
    }
}

impl std::fmt::Debug for TraceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = TraceFile::new(dir.path().join("spans.jsonl"));
        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();
        assert_eq!(read(file.path()), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let file = TraceFile::with_limits(path.clone(), 4, 2);

        for n in 1..=5 {
            file.append_line(&format!("line-{n}")).unwrap();
        }

        assert_eq!(read(&path), "line-5\n");
        assert_eq!(read(&dir.path().join("spans.jsonl.1")), "line-4\n");
        assert_eq!(read(&dir.path().join("spans.jsonl.2")), "line-3\n");
        assert!(!dir.path().join("spans.jsonl.3").exists());
    }
}
