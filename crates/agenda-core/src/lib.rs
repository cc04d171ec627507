//! Core domain logic for the schedule viewer.
//!
//! This crate turns spreadsheet rows into a canonical event list:
//! - Time normalization: raw cells to `"H:MM AM"` strings and minute keys
//! - Record building: type tags, primary type, ticketed flag
//! - Session folding: session rows nest under the preceding block
//! - Filtering: day, type and free-text search over the canonical list
//!
//! It also carries the pieces a presentation layer needs: the view state
//! machine, category colors and the export layout model.

mod cell;
pub mod day;
pub mod event;
pub mod event_type;
pub mod export;
pub mod filter;
pub mod palette;
mod schedule;
mod session;
pub mod time;
pub mod view;

pub use cell::{CellValue, RawRow, excel_serial_to_datetime};
pub use day::{DayLabel, ScheduleContext};
pub use event::{EventRecord, cmp_chronological};
pub use export::{ExportLayout, ExportOptions};
pub use filter::{FilterState, compute_visible, search_summary};
pub use schedule::{DayGroup, Schedule, group_by_day, parse_last_updated};
pub use session::attach_sessions;
pub use time::{normalize_time, time_to_minutes};
pub use view::{ViewMode, ViewState};
