//! Presentation-side view state: filter selection plus the search overlay.
//!
//! Opening search saves the current filters as a restore point. Closing it
//! clears the query and puts the saved filters back, discarding any day or
//! type changes made while searching.

use crate::event::EventRecord;
use crate::filter::{FilterState, search_summary};
use crate::schedule::Schedule;

/// Coarse mode of the view, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// No filters, no search.
    Idle,
    /// Day or type filters active.
    Filtered,
    /// Search overlay open (filters may also be active).
    Searching,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    filter: FilterState,
    /// Filters saved when search opened; `Some` while searching.
    restore_point: Option<FilterState>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub const fn is_searching(&self) -> bool {
        self.restore_point.is_some()
    }

    pub fn mode(&self) -> ViewMode {
        if self.is_searching() {
            ViewMode::Searching
        } else if self.filter.has_filters() {
            ViewMode::Filtered
        } else {
            ViewMode::Idle
        }
    }

    /// `None` selects every day.
    pub fn select_day(&mut self, day: Option<String>) {
        self.filter.selected_day = day;
    }

    pub fn toggle_type(&mut self, event_type: &str) {
        self.filter.toggle_type(event_type);
    }

    /// Opens the search overlay. Does nothing if it is already open.
    pub fn open_search(&mut self) {
        if self.restore_point.is_none() {
            self.restore_point = Some(self.filter.clone());
        }
    }

    /// Updates the query. Ignored unless search is open.
    pub fn set_query(&mut self, query: &str) {
        if self.is_searching() {
            self.filter.search_query = query.to_string();
        }
    }

    /// Closes the overlay and restores the filters saved when it opened.
    pub fn close_search(&mut self) {
        if let Some(saved) = self.restore_point.take() {
            self.filter = FilterState {
                search_query: String::new(),
                ..saved
            };
        }
    }

    /// Open if closed, close if open.
    pub fn toggle_search(&mut self) {
        if self.is_searching() {
            self.close_search();
        } else {
            self.open_search();
        }
    }

    /// Recomputes the visible set from scratch (filters, then search).
    pub fn visible<'a>(&self, schedule: &'a Schedule) -> Vec<&'a EventRecord> {
        schedule.visible(&self.filter)
    }

    /// Results line for an open search with a non-blank query.
    pub fn results_summary(&self, count: usize) -> Option<String> {
        let query = self.filter.search_query.trim();
        (self.is_searching() && !query.is_empty()).then(|| search_summary(count, query))
    }
}
