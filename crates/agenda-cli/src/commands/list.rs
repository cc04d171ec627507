//! `agenda list`: the agenda grouped by day.
//!
//! Filters map onto the viewer state machine: `--day` and `--type` select
//! filters, `--search` opens a search over them.

use std::fmt::Write as _;
use std::io::Write;

use agenda_core::{EventRecord, Schedule, ViewState, group_by_day};
use anyhow::Result;
use clap::Args;

/// Width of the `"start - end"` column; fits `"10:30 AM - 12:00 PM"`.
const TIME_COLUMN: usize = 19;

/// Expanded lines start under the title.
const DETAIL_INDENT: usize = 2 + TIME_COLUMN + 2;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show this day (the full label, e.g. "Monday, June 2").
    #[arg(long)]
    pub day: Option<String>,

    /// Only show events tagged with this type. Repeatable.
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Case-insensitive text search over titles, details, locations, types
    /// and sessions.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show details, location, type and sessions under each event.
    #[arg(short, long)]
    pub expand: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Replays the flags onto a fresh viewer state.
    pub fn view_state(&self) -> ViewState {
        let mut view = ViewState::new();
        view.select_day(self.day.clone());
        for event_type in &self.types {
            if !view.filter().selected_types.contains(event_type) {
                view.toggle_type(event_type);
            }
        }
        if let Some(query) = &self.search {
            view.open_search();
            view.set_query(query);
        }
        view
    }
}

/// Format visible events as a day-grouped agenda.
pub fn format_agenda(events: &[&EventRecord], expand: bool) -> String {
    let mut output = String::new();

    if events.is_empty() {
        writeln!(output, "No events match the current filters.").unwrap();
        return output;
    }

    for (i, group) in group_by_day(events.iter().copied()).iter().enumerate() {
        if i > 0 {
            writeln!(output).unwrap();
        }
        writeln!(output, "{}", group.day.label).unwrap();
        writeln!(output, "{}", "─".repeat(group.day.label.chars().count())).unwrap();
        for event in &group.events {
            write_event(&mut output, event, expand);
        }
    }

    output
}

fn write_event(output: &mut String, event: &EventRecord, expand: bool) {
    let badge = if event.is_ticketed { "  [ticketed]" } else { "" };
    writeln!(
        output,
        "  {:<TIME_COLUMN$}  {}{badge}",
        event.time_range(),
        event.title
    )
    .unwrap();

    if !expand {
        return;
    }

    let indent = " ".repeat(DETAIL_INDENT);
    if event.has_details() {
        let details = event.details.as_deref().unwrap_or_default();
        for (i, line) in details
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let label = if i == 0 { "Details:" } else { "" };
            writeln!(output, "{indent}{label:<10}{line}").unwrap();
        }
        let location = event.location.as_deref().unwrap_or("TBD");
        writeln!(output, "{indent}{:<10}{location}", "Location:").unwrap();
        writeln!(output, "{indent}{:<10}{}", "Type:", event.raw_type).unwrap();
    }
    if !event.sessions.is_empty() {
        writeln!(output, "{indent}Session Presentations ({})", event.sessions.len()).unwrap();
        for session in &event.sessions {
            write_session(output, &indent, session);
        }
    }
}

fn write_session(output: &mut String, indent: &str, session: &EventRecord) {
    writeln!(output, "{indent}- {}", session.title_with_time()).unwrap();

    let nested = format!("{indent}  ");
    let details = session.details.as_deref().unwrap_or_default();
    for line in details.lines().map(str::trim).filter(|l| !l.is_empty()) {
        writeln!(output, "{nested}{line}").unwrap();
    }
    if let Some(location) = &session.location {
        writeln!(output, "{nested}Location: {location}").unwrap();
    }
    if let Some(link) = &session.pdf_link {
        writeln!(output, "{nested}PDF: {link}").unwrap();
    }
}

/// Runs the list command.
pub fn run<W: Write>(writer: &mut W, schedule: &Schedule, args: &ListArgs) -> Result<()> {
    let view = args.view_state();
    let visible = view.visible(schedule);
    tracing::debug!(mode = ?view.mode(), visible = visible.len(), "computed visible events");

    if args.json {
        serde_json::to_writer_pretty(&mut *writer, &visible)?;
        writeln!(writer)?;
        return Ok(());
    }

    if let Some(date) = schedule.last_updated() {
        writeln!(writer, "Current as of {}", date.format("%-m/%-d/%Y"))?;
        writeln!(writer)?;
    }
    if let Some(summary) = view.results_summary(visible.len()) {
        writeln!(writer, "{summary}")?;
        writeln!(writer)?;
    }
    write!(writer, "{}", format_agenda(&visible, args.expand))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::event::columns;
    use agenda_core::{RawRow, ScheduleContext, ViewMode};
    use chrono::NaiveDate;
    use insta::assert_snapshot;

    fn event(day: &str, title: &str, kind: &str, start: &str, end: &str) -> RawRow {
        RawRow::new()
            .with_text(columns::DATE, day)
            .with_text(columns::TITLE, title)
            .with_text(columns::EVENT_TYPE, kind)
            .with_text(columns::TIME_START, start)
            .with_text(columns::TIME_END, end)
    }

    fn schedule() -> Schedule {
        Schedule::from_rows(
            [
                event(
                    "Monday, June 2",
                    "Technical Sessions: Water",
                    "Technical Program",
                    "8:00 AM",
                    "12:00 PM",
                )
                .with_text(columns::DETAILS, "Morning block\nSecond line")
                .with_text(columns::LOCATION, "Ballroom A"),
                event("Monday, June 2", "Pit Lake Chemistry", "Session", "8:00 AM", "8:30 AM")
                    .with_text(columns::DETAILS, "Speaker: A. Smith\nUniversity of Idaho")
                    .with_text(columns::LOCATION, "Ballroom A")
                    .with_text(columns::PDF_LINK, "https://example.org/pit-lake.pdf"),
                event("Monday, June 2", "Tailings Q&A", "Session", "", ""),
                event("Monday, June 2", "Registration Desk", "Registration", "7:00 AM", "5:00 PM"),
                event(
                    "Sunday, June 1",
                    "Icebreaker Reception",
                    "Ticketed Event; Networking and Social Functions",
                    "6:00 PM",
                    "8:00 PM",
                ),
            ],
            &ScheduleContext::with_year(2025),
        )
        .with_last_updated(NaiveDate::from_ymd_opt(2025, 5, 20))
    }

    fn args() -> ListArgs {
        ListArgs {
            day: None,
            types: Vec::new(),
            search: None,
            expand: false,
            json: false,
        }
    }

    fn render(args: &ListArgs) -> String {
        let mut output = Vec::new();
        run(&mut output, &schedule(), args).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_list_groups_by_day() {
        assert_snapshot!(render(&args()), @r"
        Current as of 5/20/2025

        Sunday, June 1
        ──────────────
          6:00 PM - 8:00 PM    Icebreaker Reception  [ticketed]

        Monday, June 2
        ──────────────
          7:00 AM - 5:00 PM    Registration Desk
          8:00 AM - 12:00 PM   Technical Sessions: Water
        ");
    }

    #[test]
    fn test_list_expanded_shows_details_and_sessions() {
        let args = ListArgs {
            day: Some("Monday, June 2".to_string()),
            expand: true,
            ..args()
        };
        assert_snapshot!(render(&args), @r"
        Current as of 5/20/2025

        Monday, June 2
        ──────────────
          7:00 AM - 5:00 PM    Registration Desk
          8:00 AM - 12:00 PM   Technical Sessions: Water
                               Details:  Morning block
                                         Second line
                               Location: Ballroom A
                               Type:     Technical Program
                               Session Presentations (2)
                               - Pit Lake Chemistry (8:00 AM - 8:30 AM)
                                 Speaker: A. Smith
                                 University of Idaho
                                 Location: Ballroom A
                                 PDF: https://example.org/pit-lake.pdf
                               - Tailings Q&A
        ");
    }

    #[test]
    fn test_list_search_prints_summary() {
        let args = ListArgs {
            search: Some("PIT LAKE".to_string()),
            ..args()
        };
        assert_snapshot!(render(&args), @r#"
        Current as of 5/20/2025

        Showing 1 result for "PIT LAKE"

        Monday, June 2
        ──────────────
          8:00 AM - 12:00 PM   Technical Sessions: Water
        "#);
    }

    #[test]
    fn test_list_empty_state() {
        let args = ListArgs {
            day: Some("Sunday, June 1".to_string()),
            types: vec!["Registration".to_string()],
            ..args()
        };
        let output = render(&args);
        assert!(output.ends_with("No events match the current filters.\n"));
    }

    #[test]
    fn test_repeated_type_flag_stays_selected() {
        let args = ListArgs {
            types: vec!["Registration".to_string(), "Registration".to_string()],
            ..args()
        };
        let view = args.view_state();
        assert_eq!(view.mode(), ViewMode::Filtered);
        assert_eq!(view.visible(&schedule()).len(), 1);
    }

    #[test]
    fn test_list_json_is_visible_records() {
        let args = ListArgs {
            types: vec!["Networking and Social Functions".to_string()],
            json: true,
            ..args()
        };
        let output = render(&args);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["title"], "Icebreaker Reception");
        assert_eq!(records[0]["is_ticketed"], true);
        assert_eq!(records[0]["start_minutes"], 1080);
    }
}
