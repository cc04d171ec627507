//! Structured event records built from spreadsheet rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cell::{CellValue, RawRow};
use crate::day::{DayLabel, ScheduleContext};
use crate::event_type::{self, SESSION};
use crate::time::{normalize_time, time_to_minutes};

/// Column headers the builder reads. Order in the sheet does not matter.
pub mod columns {
    pub const DATE: &str = "Date";
    pub const TITLE: &str = "Event/Function";
    pub const EVENT_TYPE: &str = "Event Type";
    pub const TIME_START: &str = "Time Start";
    pub const TIME_END: &str = "Time End";
    pub const DETAILS: &str = "Event Details";
    pub const LOCATION: &str = "Location";
    pub const PDF_LINK: &str = "PDF Link";
}

/// One schedule entry, possibly with nested sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub date: DayLabel,
    pub start_time: String,
    pub end_time: String,
    /// Sort key derived from `start_time`, in 0..=1439.
    pub start_minutes: u16,
    /// All tags from the type field, in sheet order.
    pub event_types: Vec<String>,
    /// The type field as written, before splitting.
    pub raw_type: String,
    pub primary_type: Option<String>,
    pub is_ticketed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<EventRecord>,
}

impl EventRecord {
    /// Maps one raw row into a record. Never fails; missing fields become
    /// empty or `None`.
    pub fn from_row(row: &RawRow, ctx: &ScheduleContext) -> Self {
        let raw_type = row.text(columns::EVENT_TYPE).unwrap_or_default();
        let event_types = event_type::split_event_types(&raw_type);
        let primary_type = event_type::primary_type(&event_types).map(String::from);
        let is_ticketed = event_type::is_ticketed(&event_types);

        let start_time = normalize_time(row.get(columns::TIME_START));
        let end_time = normalize_time(row.get(columns::TIME_END));
        let start_minutes = time_to_minutes(&start_time);

        let date = match row.get(columns::DATE) {
            Some(CellValue::DateTime(dt)) => DayLabel::from_date(dt.date(), ctx),
            Some(other) => DayLabel::parse(other.to_string(), ctx),
            None => DayLabel::parse(String::new(), ctx),
        };

        Self {
            title: row.text(columns::TITLE).unwrap_or_default(),
            date,
            start_time,
            end_time,
            start_minutes,
            event_types,
            raw_type,
            primary_type,
            is_ticketed,
            details: row.text(columns::DETAILS),
            location: row.text(columns::LOCATION),
            pdf_link: row.text(columns::PDF_LINK),
            sessions: Vec::new(),
        }
    }

    /// Whether this row nests under the preceding block.
    pub fn is_session(&self) -> bool {
        self.primary_type.as_deref() == Some(SESSION)
    }

    /// Details with non-whitespace content.
    pub fn has_details(&self) -> bool {
        self.details.as_deref().is_some_and(|d| !d.trim().is_empty())
    }

    /// `"start - end"` as shown under the title.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// `"title (start - end)"`, or just the title when there is no start time.
    pub fn title_with_time(&self) -> String {
        if self.start_time.is_empty() {
            self.title.clone()
        } else {
            format!("{} ({})", self.title, self.time_range())
        }
    }
}

/// Chronological order: day first, then start time within the day.
pub fn cmp_chronological(a: &EventRecord, b: &EventRecord) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.start_minutes.cmp(&b.start_minutes))
}
