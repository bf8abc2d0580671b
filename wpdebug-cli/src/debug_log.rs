//! The WordPress debug log (`wp-content/debug.log`).

use crate::error::{DebugError, DebugResult};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle on the debug log file. Never creates the file on its own.
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

    /// Whether the file is there. An error (e.g. an unreadable parent
    /// directory) is reported rather than read as "missing".
    pub fn exists(&self) -> DebugResult<bool> {
        self.path
            .try_exists()
            .map_err(|e| DebugError::filesystem("inspect", &self.path, e))
    }

    /// Size in bytes
    pub fn size(&self) -> DebugResult<u64> {
        fs::metadata(&self.path)
            .map(|metadata| metadata.len())
            .map_err(|e| DebugError::filesystem("inspect", &self.path, e))
    }

    /// Whole file as text; invalid UTF-8 is replaced rather than rejected
    pub fn read_all(&self) -> DebugResult<String> {
        let bytes = fs::read(&self.path).map_err(|e| DebugError::filesystem("read", &self.path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Truncate the log to zero length
    pub fn truncate(&self) -> DebugResult<()> {
        let mut file = File::create(&self.path).map_err(|e| DebugError::filesystem("clear", &self.path, e))?;
        file.flush()
            .map_err(|e| DebugError::filesystem("clear", &self.path, e))
    }
}

/// Keep the lines `array_slice($lines, -$n)` would keep.
///
/// A positive `n` keeps the last `n` lines. Zero keeps everything, and a
/// negative `n` drops the first `|n|` lines. A trailing newline produces a
/// final empty line, which counts towards `n`.
pub fn tail_lines(content: &str, n: i64) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let len = lines.len();

    let start = if n > 0 {
        len.saturating_sub(usize::try_from(n).unwrap_or(usize::MAX))
    } else {
        usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX).min(len)
    };

    lines[start..].join("\n")
}

/// The host's error-log call.
pub trait ErrorLog {
    fn append(&self, message: &str) -> DebugResult<()>;
}

/// Writes entries the way PHP's `error_log()` does once WordPress routes it
/// to debug.log: one `[DD-Mon-YYYY HH:MM:SS UTC] message` line per call.
#[derive(Debug, Clone)]
pub struct DebugLogWriter {
    path: PathBuf,
}

impl DebugLogWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Format a single error_log line
pub fn format_entry(message: &str) -> String {
    let timestamp = Utc::now().format("%d-%b-%Y %H:%M:%S UTC");
    format!("[{}] {}\n", timestamp, message)
}

impl ErrorLog for DebugLogWriter {
    fn append(&self, message: &str) -> DebugResult<()> {
        let line = format_entry(message);
        log::debug!("appending to {}: {}", self.path.display(), line.trim_end());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| DebugError::filesystem("open", &self.path, e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| DebugError::filesystem("append to", &self.path, e))
    }
}
