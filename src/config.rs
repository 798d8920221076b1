use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::logfile::LOG_FILE_NAME;

/// Environment variable the host sets to the project root.
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Where this invocation logs to. Resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_root: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// Resolve the project root (explicit value, else the current directory)
    /// and the log path (explicit value, else `<root>/log.md`). A relative
    /// log path is taken relative to the project root.
    pub fn resolve(project_dir: Option<PathBuf>, log_file: Option<PathBuf>) -> Result<Self> {
        let project_root = match project_dir.filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => dir,
            None => std::env::current_dir().wrap_err("Failed to determine current directory")?,
        };
        Ok(Self::for_project(project_root, log_file))
    }

    pub fn for_project(project_root: PathBuf, log_file: Option<PathBuf>) -> Self {
        let log_path = match log_file {
            Some(path) if path.is_absolute() => path,
            Some(path) => project_root.join(path),
            None => project_root.join(LOG_FILE_NAME),
        };
        Self {
            project_root,
            log_path,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
