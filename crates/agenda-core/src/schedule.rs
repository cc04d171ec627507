//! The canonical event list and the views derived from it.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::cell::{CellValue, RawRow, excel_serial_to_datetime};
use crate::day::{DayLabel, ScheduleContext};
use crate::event::{EventRecord, cmp_chronological};
use crate::event_type::SESSION;
use crate::filter::{FilterState, compute_visible};
use crate::session::attach_sessions;

const LAST_UPDATED_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];

/// Chronologically sorted, session-folded events from one load.
///
/// Immutable once built; every view is recomputed from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    events: Vec<EventRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<NaiveDate>,
}

/// Events of one day, ordered by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup<'a> {
    pub day: &'a DayLabel,
    pub events: Vec<&'a EventRecord>,
}

impl Schedule {
    /// Runs the full pipeline: build records, fold sessions, sort.
    ///
    /// Row order is significant for session nesting.
    pub fn from_rows<I>(rows: I, ctx: &ScheduleContext) -> Self
    where
        I: IntoIterator<Item = RawRow>,
    {
        let records = rows
            .into_iter()
            .map(|row| EventRecord::from_row(&row, ctx));
        let mut events = attach_sessions(records);
        events.sort_by(cmp_chronological);

        tracing::debug!(events = events.len(), "built schedule");
        Self {
            events,
            last_updated: None,
        }
    }

    #[must_use]
    pub fn with_last_updated(mut self, last_updated: Option<NaiveDate>) -> Self {
        self.last_updated = last_updated;
        self
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub const fn last_updated(&self) -> Option<NaiveDate> {
        self.last_updated
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct day labels in chronological order.
    pub fn days(&self) -> Vec<&DayLabel> {
        self.events
            .iter()
            .map(|e| &e.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct type tags for the type selector, alphabetical, without
    /// `"Session"`.
    pub fn event_types(&self) -> Vec<&str> {
        self.events
            .iter()
            .flat_map(|e| e.event_types.iter())
            .map(String::as_str)
            .filter(|t| !t.is_empty() && *t != SESSION)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct primary types, alphabetical.
    pub fn primary_types(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.primary_type.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn visible(&self, filter: &FilterState) -> Vec<&EventRecord> {
        compute_visible(&self.events, filter)
    }
}

/// Groups records by day: days chronological, events by start time.
///
/// Ties keep their incoming order.
pub fn group_by_day<'a, I>(events: I) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut by_day: BTreeMap<&DayLabel, Vec<&EventRecord>> = BTreeMap::new();
    for event in events {
        by_day.entry(&event.date).or_default().push(event);
    }
    by_day
        .into_iter()
        .map(|(day, mut events)| {
            events.sort_by_key(|e| e.start_minutes);
            DayGroup { day, events }
        })
        .collect()
}

/// Interprets the workbook's "last updated" metadata cell.
pub fn parse_last_updated(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Number(serial) => excel_serial_to_datetime(*serial).map(|dt| dt.date()),
        CellValue::Text(text) => {
            let text = text.trim();
            LAST_UPDATED_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .or_else(|| {
                    DateTime::parse_from_rfc3339(text)
                        .ok()
                        .map(|dt| dt.date_naive())
                })
        }
        CellValue::Bool(_) => None,
    }
}
