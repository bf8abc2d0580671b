use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wpdebug::commands::{self, DebugCommand, DebugContext};
use wpdebug::debug_log::{DebugLogWriter, LogFile};
use wpdebug::logging::{self, LogConfig};
use wpdebug::output::Console;
use wpdebug::settings::Settings;
use wpdebug::store;

/// wpdebug - manage WordPress debugging from the command line
#[derive(Parser)]
#[command(name = "wpdebug")]
#[command(about = "Toggle WordPress debug flags and inspect debug.log")]
#[command(version)]
struct Cli {
    /// WordPress root directory
    #[arg(long, global = true, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Settings file (defaults to ./wpdebug.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress diagnostics entirely
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: DebugCommand,
}

fn run<W: std::io::Write, E: std::io::Write>(cli: &Cli, console: &mut Console<W, E>) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref(), cli.path.as_deref())
        .context("Failed to load settings")?;

    let log_config = if cli.quiet {
        LogConfig::disabled()
    } else if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    logging::init_logging(&log_config.with_log_file(settings.log_file.clone()))?;
    log::debug!("Settings: {:?}", settings);

    let store = store::open_store(&settings);
    let log_file = LogFile::new(settings.debug_log_path());
    let error_log = DebugLogWriter::new(log_file.path());

    let ctx = DebugContext {
        store: store.as_ref(),
        error_log: &error_log,
        log_file: &log_file,
    };
    commands::run(&cli.command, &ctx, console)?;
    Ok(())
}

/// Report a failed command on stderr and pick the process exit status
fn finish<W: std::io::Write, E: std::io::Write>(result: Result<()>, console: &mut Console<W, E>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing more can be done if stderr is gone too
            let _ = console.error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    let mut console = Console::stdio(!cli.no_color);

    let result = run(&cli, &mut console);
    finish(result, &mut console)
}
