use super::{php_string_cast, ConfigStore, StoreError, StoreResult};
use regex::Regex;
use std::fs;
use std::path::PathBuf;

/// Markers new constants are inserted in front of, in order of preference.
const INSERT_ANCHORS: [&str; 2] = ["/* That's all, stop editing!", "require_once ABSPATH"];

/// Store backed by a wp-config.php file, edited in place.
///
/// Only top-level `define( 'NAME', value );` statements are recognised. A
/// define that is commented out or nested behind other code on the same line
/// is ignored.
#[derive(Debug, Clone)]
pub struct WpConfigFile {
    path: PathBuf,
}

impl WpConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> StoreResult<String> {
        fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, contents: &str) -> StoreResult<()> {
        fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Matches a define for `key`. Group 1 is the raw value.
fn define_pattern(key: &str) -> Regex {
    let pattern = format!(
        r#"(?m)^[ \t]*define\s*\(\s*['"]{}['"]\s*,\s*('(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*"|[^;]*?)\s*\)\s*;"#,
        regex::escape(key)
    );
    // The key is escaped, so the pattern is always valid.
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid define pattern for {}: {}", key, e))
}

/// Raw value of the first define for `key`, if any
pub fn find_define<'a>(source: &'a str, key: &str) -> Option<&'a str> {
    define_pattern(key)
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Return `source` with `key` set to `raw_value`.
///
/// An existing define keeps its formatting and only has its value replaced.
/// Otherwise a new define is added on its own line before the first anchor.
pub fn upsert_define(source: &str, key: &str, raw_value: &str) -> Option<String> {
    if let Some(value) = define_pattern(key).captures(source).and_then(|caps| caps.get(1)) {
        let mut updated = String::with_capacity(source.len() + raw_value.len());
        updated.push_str(&source[..value.start()]);
        updated.push_str(raw_value);
        updated.push_str(&source[value.end()..]);
        return Some(updated);
    }

    let anchor = INSERT_ANCHORS
        .iter()
        .find_map(|anchor| source.find(anchor))?;
    let line_start = source[..anchor].rfind('\n').map(|i| i + 1).unwrap_or(0);

    let mut updated = String::with_capacity(source.len() + 64);
    updated.push_str(&source[..line_start]);
    updated.push_str(&format!("define( '{}', {} );\n", key, raw_value));
    updated.push_str(&source[line_start..]);
    Some(updated)
}

impl ConfigStore for WpConfigFile {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let source = self.read()?;
        Ok(find_define(&source, key).map(php_string_cast))
    }

    fn set(&self, key: &str, raw_value: &str) -> StoreResult<()> {
        let source = self.read()?;
        let updated = upsert_define(&source, key, raw_value).ok_or_else(|| StoreError::MissingAnchor {
            key: key.to_string(),
            path: self.path.clone(),
        })?;
        log::debug!("writing {} = {} to {}", key, raw_value, self.path.display());
        self.write(&updated)
    }
}
