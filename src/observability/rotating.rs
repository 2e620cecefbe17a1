//! Append-only line writer with size-based rotation.
//!
//! When the file exceeds its size limit it is shifted to `<name>.1`, older
//! backups move up by one (`.1` → `.2` …) and the oldest beyond the retention
//! count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold used by the plugin (10 MB).
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept by the plugin.
pub const MAX_BACKUPS: usize = 3;

/// Rotating line writer; the handle is opened lazily on first write.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Writer with the plugin's 10 MB / 3 backups policy.
    #[must_use]
    pub const fn with_defaults(path: PathBuf) -> Self {
        Self::new(path, MAX_FILE_BYTES, MAX_BACKUPS)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, or [`io::ErrorKind::Other`] if the
    /// lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        let size = fs::metadata(&self.path).map_or(0, |m| m.len());
        if size > self.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?,
        };
        let file = handle.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_defaults(dir.path().join("trace.json"));
        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::new(path.clone(), 4, 2);

        for i in 0..5 {
            writer.write_line(&format!("line-{i}")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-4\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "line-3\n");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "line-2\n");
        assert!(!writer.backup_path(3).exists());
    }
}
