//! Configuration store backends.
//!
//! A store is a flat key/value view of the WordPress configuration. Values
//! are written as raw PHP literals (`true`, `false`, `'text'`) and read back
//! the way PHP would print them, so `true` reads as `"1"`.

mod memory;
mod wp_cli;
mod wp_config;

pub use memory::MemoryStore;
pub use wp_cli::WpCliStore;
pub use wp_config::WpConfigFile;

use crate::settings::{Settings, StoreKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("no place to add {} found in {}", .key, .path.display())]
    MissingAnchor { key: String, path: PathBuf },

    #[error("configuration store is read-only")]
    ReadOnly,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Key/value access to the host's configuration.
pub trait ConfigStore {
    /// Read a value. `Ok(None)` means the key is not defined at all.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a raw PHP literal for `key`, defining it if needed.
    fn set(&self, key: &str, raw_value: &str) -> StoreResult<()>;
}

/// Build the store selected in the settings
pub fn open_store(settings: &Settings) -> Box<dyn ConfigStore> {
    match settings.store {
        StoreKind::File => Box::new(WpConfigFile::new(settings.wp_config_path())),
        StoreKind::WpCli => Box::new(WpCliStore::new(&settings.wp_binary, &settings.path)),
    }
}

/// Convert a raw PHP literal to the string PHP would print for it.
///
/// `true` becomes "1", `false` and `null` become "", quoted strings lose
/// their quotes and escapes. Anything else (numbers, expressions) is
/// returned trimmed but otherwise untouched.
pub fn php_string_cast(raw: &str) -> String {
    let raw = raw.trim();

    match raw.to_ascii_lowercase().as_str() {
        "true" => return "1".to_string(),
        "false" | "null" => return String::new(),
        _ => {}
    }

    for quote in ['\'', '"'] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return unescape(&raw[1..raw.len() - 1], quote);
        }
    }

    raw.to_string()
}

fn unescape(inner: &str, quote: char) -> String {
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == quote || next == '\\' {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}
