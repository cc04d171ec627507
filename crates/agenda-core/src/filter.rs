//! Filtering and free-text search over the canonical event list.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::EventRecord;

/// What the viewer currently asks to see.
///
/// The default shows everything: all days, all types, no text filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_day: Option<String>,
    /// Empty means every type. Non-empty keeps records carrying any of these tags.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub selected_types: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search_query: String,
}

impl FilterState {
    #[must_use]
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.selected_day = Some(day.into());
        self
    }

    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_types.extend(types.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Adds the type if absent, removes it if present.
    pub fn toggle_type(&mut self, event_type: &str) {
        if !self.selected_types.remove(event_type) {
            self.selected_types.insert(event_type.to_string());
        }
    }

    /// Whether day or type filters narrow the list (the query is ignored).
    pub fn has_filters(&self) -> bool {
        self.selected_day.is_some() || !self.selected_types.is_empty()
    }

    fn matches_filters(&self, event: &EventRecord) -> bool {
        let day_ok = self
            .selected_day
            .as_deref()
            .is_none_or(|day| event.date.label == day);
        let type_ok = self.selected_types.is_empty()
            || event
                .event_types
                .iter()
                .any(|t| self.selected_types.contains(t));
        day_ok && type_ok
    }
}

/// Returns the records visible under `filter`, in their existing order.
///
/// Day and type filters apply first; the search query (trimmed,
/// case-insensitive substring) only ever narrows their result. An empty
/// result is a normal outcome.
pub fn compute_visible<'a>(events: &'a [EventRecord], filter: &FilterState) -> Vec<&'a EventRecord> {
    let query = filter.search_query.trim().to_lowercase();
    events
        .iter()
        .filter(|event| filter.matches_filters(event))
        .filter(|event| query.is_empty() || matches_query(event, &query))
        .collect()
}

/// `needle` must already be lowercase.
fn matches_query(event: &EventRecord, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    let contains_opt = |text: Option<&str>| text.is_some_and(contains);

    contains(&event.title)
        || contains_opt(event.details.as_deref())
        || contains_opt(event.location.as_deref())
        || contains(&event.raw_type)
        || event.sessions.iter().any(|session| {
            contains(&session.title)
                || contains_opt(session.details.as_deref())
                || contains_opt(session.location.as_deref())
        })
}

/// Results line shown under the search box.
pub fn search_summary(count: usize, query: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Showing {count} result{plural} for \"{query}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::RawRow;
    use crate::day::ScheduleContext;
    use crate::event::columns;
    use crate::session::attach_sessions;

    fn event(day: &str, start: &str, kind: &str, title: &str) -> EventRecord {
        EventRecord::from_row(
            &RawRow::new()
                .with_text(columns::DATE, day)
                .with_text(columns::TIME_START, start)
                .with_text(columns::EVENT_TYPE, kind)
                .with_text(columns::TITLE, title),
            &ScheduleContext::with_year(2025),
        )
    }

    fn sample() -> Vec<EventRecord> {
        let mut events = attach_sessions([
            event("Sunday, June 1", "4:00 PM", "Registration", "Badge Pickup"),
            event("Monday, June 2", "7:00 AM", "Registration", "Registration Desk"),
            event("Monday, June 2", "8:00 AM", "Technical Program", "Plenary"),
            event("Monday, June 2", "8:15 AM", "Session", "Mine Water Treatment"),
            event("Monday, June 2", "9:00 AM", "Ticketed Event; Technical Program", "Collaborative Lab Tour"),
            event("Monday, June 2", "6:00 PM", "Networking and Social Functions", "Reception"),
            event("Tuesday, June 3", "8:00 AM", "Council/Committee Meetings", "Board Meeting"),
        ]);
        events.sort_by(crate::event::cmp_chronological);
        events
    }

    fn titles<'a>(events: &[&'a EventRecord]) -> Vec<&'a str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn default_filter_is_identity() {
        let events = sample();
        let visible = compute_visible(&events, &FilterState::default());
        assert_eq!(visible.len(), events.len());
        assert!(visible.iter().zip(&events).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn day_filter_is_exact_label_match() {
        let events = sample();
        let visible = compute_visible(&events, &FilterState::default().with_day("Tuesday, June 3"));
        assert_eq!(titles(&visible), ["Board Meeting"]);

        let none = compute_visible(&events, &FilterState::default().with_day("Tuesday"));
        assert!(none.is_empty());
    }

    #[test]
    fn type_filter_uses_or_semantics_over_all_tags() {
        let events = sample();
        let filter = FilterState::default().with_types(["Ticketed Event", "Council/Committee Meetings"]);
        let visible = compute_visible(&events, &filter);
        assert_eq!(titles(&visible), ["Collaborative Lab Tour", "Board Meeting"]);
    }

    #[test]
    fn day_and_types_select_in_start_order() {
        let events = sample();
        let filter = FilterState::default()
            .with_day("Monday, June 2")
            .with_types(["Registration", "Technical Program"]);
        let visible = compute_visible(&events, &filter);

        assert_eq!(
            titles(&visible),
            ["Registration Desk", "Plenary", "Collaborative Lab Tour"]
        );
        assert!(visible.windows(2).all(|w| w[0].start_minutes <= w[1].start_minutes));
    }

    #[test]
    fn day_and_type_filters_commute() {
        let events = sample();
        let by_day = FilterState::default().with_day("Monday, June 2");
        let by_type = FilterState::default().with_types(["Registration"]);

        let day_then_type: Vec<_> = compute_visible(&events, &by_day)
            .into_iter()
            .filter(|e| compute_visible(std::slice::from_ref(*e), &by_type).len() == 1)
            .collect();
        let type_then_day: Vec<_> = compute_visible(&events, &by_type)
            .into_iter()
            .filter(|e| compute_visible(std::slice::from_ref(*e), &by_day).len() == 1)
            .collect();
        let combined = compute_visible(
            &events,
            &FilterState::default()
                .with_day("Monday, June 2")
                .with_types(["Registration"]),
        );

        assert_eq!(day_then_type, type_then_day);
        assert_eq!(day_then_type, combined);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let events = sample();
        for query in ["lab", "LAB", "Lab", "  lab  "] {
            let visible = compute_visible(&events, &FilterState::default().with_query(query));
            assert_eq!(titles(&visible), ["Collaborative Lab Tour"], "query {query:?}");
        }
    }

    #[test]
    fn search_reaches_raw_type_and_sessions() {
        let events = sample();
        let by_type = compute_visible(&events, &FilterState::default().with_query("ticketed"));
        assert_eq!(titles(&by_type), ["Collaborative Lab Tour"]);

        let by_session = compute_visible(&events, &FilterState::default().with_query("water"));
        assert_eq!(titles(&by_session), ["Plenary"]);
    }

    #[test]
    fn search_only_narrows_filtered_set() {
        let events = sample();
        let filter = FilterState::default()
            .with_day("Tuesday, June 3")
            .with_query("lab");
        assert!(compute_visible(&events, &filter).is_empty());
    }

    #[test]
    fn blank_query_is_no_filter() {
        let events = sample();
        let visible = compute_visible(&events, &FilterState::default().with_query("   "));
        assert_eq!(visible.len(), events.len());
    }

    #[test]
    fn toggle_type_adds_and_removes() {
        let mut filter = FilterState::default();
        filter.toggle_type("Registration");
        assert!(filter.selected_types.contains("Registration"));
        assert!(filter.has_filters());
        filter.toggle_type("Registration");
        assert!(filter.selected_types.is_empty());
        assert!(!filter.has_filters());
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(search_summary(1, "lab"), "Showing 1 result for \"lab\"");
        assert_eq!(search_summary(0, "x"), "Showing 0 results for \"x\"");
    }
}
