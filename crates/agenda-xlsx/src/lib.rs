//! Workbook loading for the schedule viewer.
//!
//! Fetches an xlsx workbook from disk or over http(s), reads its first
//! worksheet and runs the core pipeline over the rows.
//!
//! # Sheet Layout
//!
//! - `D1`: "last updated" date (date cell or text)
//! - row 3: column names (`Date`, `Event/Function`, `Event Type`, ...)
//! - rows 4+: one event per row; fully blank rows are skipped
//!
//! Column names are the contract; column order is not.

mod sheet;
mod source;

use std::path::PathBuf;

use agenda_core::{Schedule, ScheduleContext, parse_last_updated};
use thiserror::Error;

pub use sheet::{HEADER_ROW, LAST_UPDATED_CELL, SheetData, decode, read_range};
pub use source::{Source, fetch};

/// Errors that make a load fail as a whole.
///
/// Problems with individual cells never surface here; they degrade to
/// pass-through or empty values.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a local workbook failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned status {status} for {url}")]
    Status { url: String, status: u16 },
    /// The bytes are not a readable xlsx workbook.
    #[error("invalid workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("workbook has no worksheets")]
    NoSheets,
    /// The header row is absent or has no column names.
    #[error("no column names found in row {row}")]
    MissingHeader { row: u32 },
}

/// Fetches, decodes and builds the canonical schedule.
pub async fn load_schedule(source: &Source, ctx: &ScheduleContext) -> Result<Schedule, LoadError> {
    tracing::debug!(%source, year = ctx.year, "loading schedule");
    let bytes = fetch(source).await?;
    let sheet = decode(bytes)?;
    Ok(build_schedule(sheet, ctx))
}

/// Runs the pipeline over already decoded sheet data.
pub fn build_schedule(sheet: SheetData, ctx: &ScheduleContext) -> Schedule {
    let last_updated = sheet.last_updated.as_ref().and_then(parse_last_updated);
    if sheet.last_updated.is_some() && last_updated.is_none() {
        tracing::debug!(cell = ?sheet.last_updated, "unrecognized last-updated value");
    }
    let schedule = Schedule::from_rows(sheet.rows, ctx).with_last_updated(last_updated);
    tracing::info!(
        events = schedule.len(),
        days = schedule.days().len(),
        "schedule loaded"
    );
    schedule
}
