use log::LevelFilter;
use simplelog::*;
use std::path::PathBuf;

/// Diagnostics configuration for wpdebug itself (not the WordPress debug log)
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Master switch to enable/disable all logging
    pub enabled: bool,
    /// Append diagnostics to this file instead of stderr
    pub log_file: Option<PathBuf>,
    /// Overall log level
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_file: None,
            level: LevelFilter::Warn,
        }
    }
}

impl LogConfig {
    /// Create a configuration that discards everything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Create a verbose configuration (store calls and file access)
    pub fn verbose() -> Self {
        Self {
            level: LevelFilter::Debug,
            ..Default::default()
        }
    }

    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Initialize the logging system with the given configuration
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    if !config.enabled {
        let _ = WriteLogger::init(LevelFilter::Off, Config::default(), std::io::sink());
        return Ok(());
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|builder| builder)
        .build();

    match &config.log_file {
        Some(path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            WriteLogger::init(config.level, log_config, log_file)?;
        }
        None => {
            TermLogger::init(config.level, log_config, TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }

    log::debug!("Logging initialized: level={:?}, file={:?}", config.level, config.log_file);
    Ok(())
}
