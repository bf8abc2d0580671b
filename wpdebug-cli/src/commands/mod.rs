//! The `debug` subcommands.
//!
//! Each handler gets everything it touches through [`DebugContext`], which
//! `main` builds once from the settings.

mod status;
mod toggle;
mod view;
mod write_test;

pub use status::status;
pub use toggle::{disable, enable, DISPLAY_WARNING};
pub use view::{view, LOG_END, LOG_START};
pub use write_test::{test, test_message, TEST_MESSAGE_TAG};

use crate::debug_log::{ErrorLog, LogFile};
use crate::error::{DebugError, DebugResult};
use crate::output::Console;
use crate::store::ConfigStore;
use clap::Subcommand;
use std::io::Write;
use wpdebug_types::{raw_bool, DebugFlag, FlagState};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DebugCommand {
    /// Enable WordPress debugging with logging to debug.log
    Enable {
        /// Also display errors on screen (not for production)
        #[arg(long)]
        display: bool,
    },
    /// Disable WP_DEBUG, WP_DEBUG_LOG and WP_DEBUG_DISPLAY
    Disable,
    /// Show the debug flags and the debug.log size
    Status,
    /// Write a test entry to the debug log
    Test,
    /// Print the debug log
    View {
        /// Show only the last N lines
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        tail: Option<i64>,
        /// Empty the log file after printing it
        #[arg(long)]
        clear: bool,
    },
}

/// The collaborators a subcommand works against
pub struct DebugContext<'a> {
    pub store: &'a dyn ConfigStore,
    pub error_log: &'a dyn ErrorLog,
    pub log_file: &'a LogFile,
}

/// Dispatch a parsed subcommand
pub fn run<O: Write, E: Write>(
    command: &DebugCommand,
    ctx: &DebugContext<'_>,
    console: &mut Console<O, E>,
) -> DebugResult<()> {
    match command {
        DebugCommand::Enable { display } => enable(ctx, console, *display),
        DebugCommand::Disable => disable(ctx, console),
        DebugCommand::Status => status(ctx, console),
        DebugCommand::Test => test(ctx, console),
        DebugCommand::View { tail, clear } => view(ctx, console, *tail, *clear),
    }
}

fn read_flag(store: &dyn ConfigStore, flag: DebugFlag) -> DebugResult<FlagState> {
    let value = store.get(flag.as_str()).map_err(|source| DebugError::ConfigRead {
        key: flag.as_str().to_string(),
        source,
    })?;
    log::debug!("{} reads back as {:?}", flag, value);
    Ok(FlagState::from_store_value(value.as_deref()))
}

fn write_flag(store: &dyn ConfigStore, flag: DebugFlag, value: bool) -> DebugResult<()> {
    log::debug!("setting {} to {}", flag, raw_bool(value));
    store
        .set(flag.as_str(), raw_bool(value))
        .map_err(|source| DebugError::ConfigWrite {
            key: flag.as_str().to_string(),
            source,
        })
}
