use super::{read_flag, DebugContext};
use crate::error::{DebugError, DebugResult};
use crate::output::Console;
use chrono::{DateTime, Local};
use std::io::Write;
use wpdebug_types::DebugFlag;

pub const TEST_MESSAGE_TAG: &str = "WP-CLI Debug Test";

/// `WP-CLI Debug Test: YYYY-MM-DD HH:MM:SS`
pub fn test_message(now: DateTime<Local>) -> String {
    format!("{}: {}", TEST_MESSAGE_TAG, now.format("%Y-%m-%d %H:%M:%S"))
}

/// Write one entry through the error log, provided WP_DEBUG and
/// WP_DEBUG_LOG are both on.
pub fn test<O: Write, E: Write>(ctx: &DebugContext<'_>, console: &mut Console<O, E>) -> DebugResult<()> {
    let debug = read_flag(ctx.store, DebugFlag::Debug)?;
    let debug_log = read_flag(ctx.store, DebugFlag::DebugLog)?;

    if !debug.is_enabled() || !debug_log.is_enabled() {
        return Err(DebugError::NotFullyEnabled);
    }

    let message = test_message(Local::now());
    ctx.error_log.append(&message)?;

    console.success(&format!("Test log entry written: \"{}\"", message))?;
    console.log("You can view the log with: wpdebug view")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_message_format() {
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(test_message(now), "WP-CLI Debug Test: 2026-03-07 09:05:01");
    }
}
