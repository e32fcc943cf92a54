//! Best-effort run logging with single-generation size rotation
//!
//! Appends one line per invocation to
//! `<local-app-data>/LockScreenFix/lockscreenfix.log`. The log is the only
//! place outcomes are visible; the tool itself never prints.

use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::action::Action;

/// Rotation threshold in bytes. Once the active log grows past this, it is
/// moved aside to a `.old` sibling (replacing any previous backup) before
/// the next line is appended. One backup generation, no more.
pub const MAX_LOG_BYTES: u64 = 1024 * 1024;

const LOG_FILE_NAME: &str = "lockscreenfix.log";

/// Append-only run logger.
///
/// Every filesystem step is best-effort: `append` reports errors, but the
/// caller is expected to discard them. Logging must never prevent or delay
/// the display switch it documents.
pub struct RunLogger {
    log_path: PathBuf,
}

impl RunLogger {
    /// Create a logger rooted at `log_dir`.
    ///
    /// No filesystem access happens here; the directory is created lazily on
    /// the first `append`, so an unwritable location only surfaces (and is
    /// swallowed) at that point.
    #[must_use]
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Self {
        Self {
            log_path: log_dir.as_ref().join(LOG_FILE_NAME),
        }
    }

    /// Append one run record, rotating first if the log is oversized.
    ///
    /// The line has the shape
    /// `2024-01-15 10:30:00  unlock (result: 0)`.
    ///
    /// # Errors
    /// Returns an error if the log directory cannot be created, rotation
    /// fails, or the append itself fails.
    pub fn append(&self, action: Action, result: i32) -> Result<()> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{timestamp}  {} (result: {result})", action.as_str());

        if let Some(dir) = self.log_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
        }

        self.rotate_if_oversized()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        writeln!(file, "{line}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Move the active log aside once it exceeds `MAX_LOG_BYTES`.
    fn rotate_if_oversized(&self) -> Result<()> {
        // No log yet, nothing to rotate.
        let Ok(metadata) = fs::metadata(&self.log_path) else {
            return Ok(());
        };
        if metadata.len() <= MAX_LOG_BYTES {
            return Ok(());
        }

        let backup = self.backup_path();
        fs::copy(&self.log_path, &backup)
            .with_context(|| format!("Failed to copy log to {}", backup.display()))?;
        fs::remove_file(&self.log_path).with_context(|| {
            format!("Failed to remove rotated log: {}", self.log_path.display())
        })?;

        Ok(())
    }

    /// Path of the single backup generation (`lockscreenfix.log.old`).
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.log_path.clone().into_os_string();
        name.push(".old");
        PathBuf::from(name)
    }

    /// Get the path to the active log file.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Default log directory: `LockScreenFix` under the user's local
/// application-data root. `None` when the platform cannot resolve one, in
/// which case logging is skipped for the run.
#[must_use]
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| base.join("LockScreenFix"))
}
