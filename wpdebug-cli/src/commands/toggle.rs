use super::{write_flag, DebugContext};
use crate::error::DebugResult;
use crate::output::Console;
use std::io::Write;
use wpdebug_types::DebugFlag;

pub const DISPLAY_WARNING: &str =
    "Errors will be displayed on screen. This is not recommended for production sites.";

/// Turn on WP_DEBUG and WP_DEBUG_LOG, and WP_DEBUG_DISPLAY only if asked.
///
/// Writes stop at the first failure; earlier writes are not rolled back.
pub fn enable<O: Write, E: Write>(
    ctx: &DebugContext<'_>,
    console: &mut Console<O, E>,
    display: bool,
) -> DebugResult<()> {
    write_flag(ctx.store, DebugFlag::Debug, true)?;
    write_flag(ctx.store, DebugFlag::DebugLog, true)?;
    write_flag(ctx.store, DebugFlag::DebugDisplay, display)?;

    console.success(&format!(
        "WordPress debugging enabled. Logs will be saved to {}",
        ctx.log_file.path().display()
    ))?;
    if display {
        console.warning(DISPLAY_WARNING)?;
    }
    Ok(())
}

pub fn disable<O: Write, E: Write>(ctx: &DebugContext<'_>, console: &mut Console<O, E>) -> DebugResult<()> {
    for flag in DebugFlag::ALL {
        write_flag(ctx.store, flag, false)?;
    }

    console.success("WordPress debugging disabled.")?;
    Ok(())
}
