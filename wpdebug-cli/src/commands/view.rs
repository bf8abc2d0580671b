use super::DebugContext;
use crate::debug_log::tail_lines;
use crate::error::{DebugError, DebugResult};
use crate::output::Console;
use std::io::Write;

pub const LOG_START: &str = "--- DEBUG LOG START ---";
pub const LOG_END: &str = "--- DEBUG LOG END ---";

/// Print the log, optionally only its tail, then optionally empty it.
///
/// Clearing happens after printing and applies to the whole file, not just
/// the lines shown. If printing fails the file is left alone.
pub fn view<O: Write, E: Write>(
    ctx: &DebugContext<'_>,
    console: &mut Console<O, E>,
    tail: Option<i64>,
    clear: bool,
) -> DebugResult<()> {
    if !ctx.log_file.exists()? {
        return Err(DebugError::LogFileMissing);
    }

    let content = ctx.log_file.read_all()?;

    if content.is_empty() {
        console.log("Debug log file is empty.")?;
    } else {
        let content = match tail {
            Some(n) => {
                let shown = tail_lines(&content, n);
                console.log(&format!("Showing last {} lines of debug log:", n))?;
                shown
            }
            None => content,
        };

        console.log(&format!("\n{}\n", LOG_START))?;
        console.log(&content)?;
        console.log(&format!("\n{}\n", LOG_END))?;
    }

    if clear {
        // Only clear once the content has actually reached the operator
        console.flush()?;
        ctx.log_file.truncate()?;
        console.success("Debug log file cleared.")?;
    }
    Ok(())
}
