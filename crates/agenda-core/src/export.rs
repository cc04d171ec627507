//! Layout model handed to the document exporter.
//!
//! The exporter draws one column per day over the full schedule, never the
//! filtered view. Rasterizing this model is the exporter's business.

use serde::Serialize;

use crate::event::EventRecord;
use crate::event_type::TICKETED_EVENT;
use crate::palette::{Colors, TICKETED_ACCENT, colors_for, is_italic_title};
use crate::schedule::{Schedule, group_by_day};

/// Legend labels longer than this are cut and suffixed with `"..."`.
const LEGEND_LABEL_MAX: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// File name stem; the last-updated date is appended when known.
    pub file_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_prefix: "Schedule".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportLayout {
    pub file_name: String,
    pub expanded: bool,
    pub columns: Vec<ExportColumn>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportColumn {
    pub header: String,
    pub cards: Vec<ExportCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportCard {
    pub title: String,
    pub time: String,
    pub colors: Colors,
    pub italic: bool,
    pub ticketed: bool,
    /// Only present in expanded layouts, for events with non-blank details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<CardDetails>,
    /// One line per session; only filled in expanded layouts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDetails {
    pub details: String,
    /// `"TBD"` when the event has no location.
    pub location: String,
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<&'static str>,
}

impl ExportLayout {
    pub fn build(schedule: &Schedule, expanded: bool, options: &ExportOptions) -> Self {
        let columns = group_by_day(schedule.events())
            .into_iter()
            .map(|group| ExportColumn {
                header: column_header(group.day.day_name(), group.day.month_day(), &group.day.label),
                cards: group
                    .events
                    .into_iter()
                    .map(|event| card(event, expanded))
                    .collect(),
            })
            .collect();

        let mut legend: Vec<LegendEntry> = schedule
            .primary_types()
            .into_iter()
            .map(|t| LegendEntry {
                label: truncate_label(t),
                colors: Some(colors_for(Some(t))),
                accent: None,
            })
            .collect();
        legend.push(LegendEntry {
            label: TICKETED_EVENT.to_string(),
            colors: None,
            accent: Some(TICKETED_ACCENT),
        });

        Self {
            file_name: file_name(schedule, options),
            expanded,
            columns,
            legend,
        }
    }
}

fn column_header(day_name: &str, month_day: &str, label: &str) -> String {
    if month_day.is_empty() {
        label.to_string()
    } else {
        format!("{day_name}, {month_day}")
    }
}

fn card(event: &EventRecord, expanded: bool) -> ExportCard {
    let primary = event.primary_type.as_deref();
    let details = (expanded && event.has_details()).then(|| CardDetails {
        details: event.details.clone().unwrap_or_default(),
        location: event.location.clone().unwrap_or_else(|| "TBD".to_string()),
        event_type: event.raw_type.clone(),
    });
    let sessions = if expanded {
        event.sessions.iter().map(EventRecord::title_with_time).collect()
    } else {
        Vec::new()
    };

    ExportCard {
        title: event.title.clone(),
        time: event.time_range(),
        colors: colors_for(primary),
        italic: is_italic_title(primary),
        ticketed: event.is_ticketed,
        details,
        sessions,
    }
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() > LEGEND_LABEL_MAX {
        let head: String = label.chars().take(LEGEND_LABEL_MAX).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

fn file_name(schedule: &Schedule, options: &ExportOptions) -> String {
    match schedule.last_updated() {
        Some(date) => format!("{}-{}.pdf", options.file_prefix, date.format("%m%d%Y")),
        None => format!("{}.pdf", options.file_prefix),
    }
}
