use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures a debug subcommand can report to the operator.
#[derive(Error, Debug)]
pub enum DebugError {
    #[error("Could not set {key} in the configuration store")]
    ConfigWrite {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("Could not read {key} from the configuration store")]
    ConfigRead {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("Debugging is not fully enabled. Run \"wpdebug enable\" first.")]
    NotFullyEnabled,

    #[error("Debug log file does not exist yet.")]
    LogFileMissing,

    #[error("Failed to {} {}", .action, .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output")]
    Output(#[from] std::io::Error),
}

impl DebugError {
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DebugError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type DebugResult<T> = Result<T, DebugError>;
