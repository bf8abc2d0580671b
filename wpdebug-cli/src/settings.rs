use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "wpdebug.toml";

/// Which configuration store backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreKind {
    /// Edit wp-config.php directly
    File,
    /// Shell out to `wp config`
    WpCli,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// WordPress root directory
    pub path: PathBuf,
    /// wp-config.php location, defaults to `<path>/wp-config.php`
    #[serde(default)]
    pub config_file: Option<PathBuf>,
    /// WP_CONTENT_DIR, defaults to `<path>/wp-content`
    #[serde(default)]
    pub content_dir: Option<PathBuf>,
    pub store: StoreKind,
    pub wp_binary: String,
    /// Where to write wpdebug's own diagnostics, stderr when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from defaults, an optional TOML file, the environment
    /// and finally the `--path` flag (highest priority).
    pub fn load(config_file: Option<&Path>, path_override: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_file, path_override, |key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(
        config_file: Option<&Path>,
        path_override: Option<&Path>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .set_default("path", ".")?
            .set_default("store", "file")?
            .set_default("wp_binary", "wp")?;

        // 1. Settings file, required only when named explicitly
        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    builder = builder.add_source(File::from(local).required(false));
                }
            }
        }

        // 2. Environment variables
        for (var, key) in [
            ("WPDEBUG_PATH", "path"),
            ("WPDEBUG_CONFIG_FILE", "config_file"),
            ("WPDEBUG_CONTENT_DIR", "content_dir"),
            ("WPDEBUG_STORE", "store"),
            ("WPDEBUG_WP_BINARY", "wp_binary"),
            ("WPDEBUG_LOG_FILE", "log_file"),
        ] {
            if let Some(value) = env(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        // 3. Command line
        if let Some(path) = path_override {
            builder = builder.set_override("path", path.to_string_lossy().to_string())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn wp_config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| self.path.join("wp-config.php"))
    }

    pub fn content_dir(&self) -> PathBuf {
        self.content_dir
            .clone()
            .unwrap_or_else(|| self.path.join("wp-content"))
    }

    /// The WordPress debug log, `<content_dir>/debug.log`
    pub fn debug_log_path(&self) -> PathBuf {
        self.content_dir().join("debug.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.toml");
        fs::write(&file, "").unwrap();

        let settings = Settings::load_with_env(Some(file.as_path()), None, no_env).unwrap();
        assert_eq!(settings.path, PathBuf::from("."));
        assert_eq!(settings.store, StoreKind::File);
        assert_eq!(settings.wp_binary, "wp");
        assert_eq!(settings.wp_config_path(), PathBuf::from("./wp-config.php"));
        assert_eq!(settings.debug_log_path(), PathBuf::from("./wp-content/debug.log"));
    }

    #[test]
    fn test_file_then_env_then_flag() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("wpdebug.toml");
        fs::write(
            &file,
            "path = \"/from/file\"\nstore = \"wp-cli\"\ncontent_dir = \"/srv/content\"\n",
        )
        .unwrap();

        let settings = Settings::load_with_env(Some(file.as_path()), None, no_env).unwrap();
        assert_eq!(settings.path, PathBuf::from("/from/file"));
        assert_eq!(settings.store, StoreKind::WpCli);
        assert_eq!(settings.debug_log_path(), PathBuf::from("/srv/content/debug.log"));

        let env: HashMap<&str, &str> = [("WPDEBUG_PATH", "/from/env"), ("WPDEBUG_STORE", "file")]
            .into_iter()
            .collect();
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let settings = Settings::load_with_env(Some(file.as_path()), None, lookup).unwrap();
        assert_eq!(settings.path, PathBuf::from("/from/env"));
        assert_eq!(settings.store, StoreKind::File);

        let settings =
            Settings::load_with_env(Some(file.as_path()), Some(Path::new("/from/flag")), lookup).unwrap();
        assert_eq!(settings.path, PathBuf::from("/from/flag"));
        assert_eq!(settings.wp_config_path(), PathBuf::from("/from/flag/wp-config.php"));
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Settings::load_with_env(Some(missing.as_path()), None, no_env).is_err());
    }

    #[test]
    fn test_unknown_store_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.toml");
        fs::write(&file, "store = \"database\"\n").unwrap();
        assert!(Settings::load_with_env(Some(file.as_path()), None, no_env).is_err());
    }
}
