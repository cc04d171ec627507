//! Day labels and the chronological order over them.
//!
//! Schedules label days as `"<DayName>, <MonthDay>"` (e.g. `"Monday, June 2"`).
//! The calendar date is recovered once at ingestion by reading the segment
//! after the comma in a year context; the label itself stays the display and
//! filter key.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Ambient context for interpreting day labels, which carry no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleContext {
    /// Year assumed for every label. Conferences spanning a year boundary
    /// sort incorrectly.
    pub year: i32,
}

impl ScheduleContext {
    pub const fn with_year(year: i32) -> Self {
        Self { year }
    }
}

impl Default for ScheduleContext {
    /// Uses the current local year.
    fn default() -> Self {
        Self {
            year: Local::now().year(),
        }
    }
}

/// A day label together with the calendar date parsed from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayLabel {
    pub label: String,
    /// `None` when the label does not follow the `"<DayName>, <MonthDay>"` shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl DayLabel {
    pub fn parse(label: impl Into<String>, ctx: &ScheduleContext) -> Self {
        let label = label.into();
        let date = parse_month_day(&label, ctx.year);
        if date.is_none() && !label.is_empty() {
            tracing::debug!(%label, "day label has no parseable month/day");
        }
        Self { label, date }
    }

    /// Builds a label from a native date cell.
    ///
    /// The cell's own year is discarded: the label is dated in `ctx` like any
    /// text label, so both kinds of cell land on the same day.
    pub fn from_date(date: NaiveDate, ctx: &ScheduleContext) -> Self {
        Self::parse(date.format("%A, %B %-d").to_string(), ctx)
    }

    /// The part before the first comma, e.g. `"Monday"`.
    pub fn day_name(&self) -> &str {
        self.label.split(',').next().unwrap_or_default().trim()
    }

    /// The part after the first comma, e.g. `"June 2"`.
    pub fn month_day(&self) -> &str {
        self.label.split(',').nth(1).unwrap_or_default().trim()
    }
}

fn parse_month_day(label: &str, year: i32) -> Option<NaiveDate> {
    let month_day = label.split(',').nth(1)?.trim();
    if month_day.is_empty() {
        return None;
    }
    // %B accepts both full and abbreviated month names when parsing.
    NaiveDate::parse_from_str(&format!("{month_day} {year}"), "%B %d %Y").ok()
}

impl Ord for DayLabel {
    /// Parsed dates ascending, unparseable labels last, ties by label text.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for DayLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
