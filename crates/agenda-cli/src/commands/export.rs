//! `agenda export`: the printable layout of the full schedule as JSON.
//!
//! The layout always covers every event; list filters do not apply. A
//! renderer turns it into the document named by `file_name`.

use std::io::Write;
use std::path::PathBuf;

use agenda_core::{ExportLayout, Schedule};
use anyhow::{Context, Result};
use clap::Args;

use crate::Config;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Include details, locations and sessions on each card.
    #[arg(long)]
    pub expanded: bool,

    /// Write the layout to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the export command.
pub fn run<W: Write>(
    writer: &mut W,
    schedule: &Schedule,
    args: &ExportArgs,
    config: &Config,
) -> Result<()> {
    let layout = ExportLayout::build(schedule, args.expanded, &config.export_options());
    let json = serde_json::to_string_pretty(&layout)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), file_name = %layout.file_name, "wrote export layout");
            writeln!(
                writer,
                "Wrote {} ({} days) to {}",
                layout.file_name,
                layout.columns.len(),
                path.display()
            )?;
        }
        None => writeln!(writer, "{json}")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::event::columns;
    use agenda_core::{RawRow, ScheduleContext};
    use chrono::NaiveDate;

    fn schedule() -> Schedule {
        let row = |day: &str, title: &str, kind: &str| {
            RawRow::new()
                .with_text(columns::DATE, day)
                .with_text(columns::TITLE, title)
                .with_text(columns::EVENT_TYPE, kind)
                .with_text(columns::TIME_START, "9:00 AM")
                .with_text(columns::TIME_END, "10:00 AM")
        };
        Schedule::from_rows(
            [
                row("Monday, June 2", "Plenary", "Technical Program"),
                row("Monday, June 2", "Keynote", "Session"),
                row("Tuesday, June 3", "Council Breakfast", "Council/Committee Meetings"),
            ],
            &ScheduleContext::with_year(2025),
        )
        .with_last_updated(NaiveDate::from_ymd_opt(2025, 5, 20))
    }

    fn config() -> Config {
        Config {
            export_prefix: "Conference".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_export_to_stdout() {
        let args = ExportArgs {
            expanded: true,
            output: None,
        };
        let mut output = Vec::new();
        run(&mut output, &schedule(), &args, &config()).unwrap();

        let layout: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(layout["file_name"], "Conference-05202025.pdf");
        assert_eq!(layout["columns"].as_array().unwrap().len(), 2);
        assert_eq!(layout["columns"][0]["header"], "Monday, June 2");
        assert_eq!(
            layout["columns"][0]["cards"][0]["sessions"][0],
            "Keynote (9:00 AM - 10:00 AM)"
        );
    }

    #[test]
    fn test_export_to_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("layout.json");
        let args = ExportArgs {
            expanded: false,
            output: Some(path.clone()),
        };
        let mut output = Vec::new();
        run(&mut output, &schedule(), &args, &config()).unwrap();

        let message = String::from_utf8(output).unwrap();
        assert!(message.starts_with("Wrote Conference-05202025.pdf (2 days) to "));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["expanded"], false);
        assert!(written["columns"][0]["cards"][0].get("sessions").is_none());
    }
}
