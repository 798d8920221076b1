//! Append-only markdown log.
//!
//! Each append is one open → lock → write → flush sequence under an `fs2`
//! exclusive advisory lock, so concurrent hook processes cannot interleave
//! partial entries or both write the title header. The lock is released when
//! the handle drops, on every exit path.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use fs2::FileExt;

/// First line of every log file.
pub const LOG_TITLE: &str = "# Claude Code Event Log";

/// Default file name inside the project root.
pub const LOG_FILE_NAME: &str = "log.md";

/// The project's event log.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one rendered entry followed by a blank line, writing the title
    /// header first if the file is new or empty.
    pub fn append(&self, entry: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).wrap_err_with(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .wrap_err_with(|| format!("Failed to open log file: {}", self.path.display()))?;
        file.lock_exclusive()
            .wrap_err_with(|| format!("Failed to acquire exclusive lock: {}", self.path.display()))?;

        let result = self.write_locked(&mut file, entry);
        let _ = FileExt::unlock(&file);
        result
    }

    fn write_locked(&self, file: &mut File, entry: &str) -> Result<()> {
        let is_empty = file
            .metadata()
            .wrap_err_with(|| format!("Failed to stat log file: {}", self.path.display()))?
            .len()
            == 0;

        let mut buf = String::with_capacity(entry.len() + LOG_TITLE.len() + 4);
        if is_empty {
            buf.push_str(LOG_TITLE);
            buf.push_str("\n\n");
        }
        buf.push_str(entry);
        buf.push_str("\n\n");

        file.write_all(buf.as_bytes())
            .wrap_err_with(|| format!("Failed to write entry: {}", self.path.display()))?;
        file.flush()
            .wrap_err_with(|| format!("Failed to flush log file: {}", self.path.display()))?;
        Ok(())
    }
}
