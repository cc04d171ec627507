//! `agenda days`: the day labels usable with `list --day`.

use std::io::Write;

use agenda_core::Schedule;
use anyhow::Result;

/// Runs the days command.
pub fn run<W: Write>(writer: &mut W, schedule: &Schedule, json: bool) -> Result<()> {
    let labels: Vec<&str> = schedule.days().iter().map(|d| d.label.as_str()).collect();

    if json {
        serde_json::to_writer_pretty(&mut *writer, &labels)?;
        writeln!(writer)?;
    } else {
        for label in labels {
            writeln!(writer, "{label}")?;
        }
    }

    Ok(())
}
