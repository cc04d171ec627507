//! `agenda types`: the event types usable with `list --type`.

use std::io::Write;

use agenda_core::Schedule;
use anyhow::Result;

/// Runs the types command.
pub fn run<W: Write>(writer: &mut W, schedule: &Schedule, json: bool) -> Result<()> {
    let types = schedule.event_types();

    if json {
        serde_json::to_writer_pretty(&mut *writer, &types)?;
        writeln!(writer)?;
    } else {
        for event_type in types {
            writeln!(writer, "{event_type}")?;
        }
    }

    Ok(())
}
