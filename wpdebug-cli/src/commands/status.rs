use super::{read_flag, DebugContext};
use crate::error::DebugResult;
use crate::output::Console;
use std::io::Write;
use wpdebug_types::{format_size, DebugFlag};

pub fn status<O: Write, E: Write>(ctx: &DebugContext<'_>, console: &mut Console<O, E>) -> DebugResult<()> {
    let mut states = Vec::with_capacity(DebugFlag::ALL.len());
    for flag in DebugFlag::ALL {
        states.push((flag, read_flag(ctx.store, flag)?));
    }

    console.log("WordPress Debug Status:")?;
    for (flag, state) in states {
        console.log(&format!("{}: {}", flag, state.as_str()))?;
    }

    if ctx.log_file.exists()? {
        let size = format_size(ctx.log_file.size()?);
        console.log(&format!("Debug log file: Exists ({})", size))?;
    } else {
        console.log("Debug log file: Does not exist")?;
    }
    Ok(())
}
