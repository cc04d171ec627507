//! Raw spreadsheet cells and rows, as handed over by a workbook reader.

use std::collections::HashMap;
use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Seconds in a day, for splitting serial date fractions.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Converts a spreadsheet serial date (days since 1899-12-30, fraction is the
/// time of day) into a date-time, rounded to the nearest second.
///
/// Returns `None` for negative, non-finite or out-of-range serials.
#[expect(
    clippy::cast_possible_truncation,
    reason = "serial is range-checked before the cast"
)]
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..3_000_000.0).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * SECONDS_PER_DAY).round() as i64;
    epoch.checked_add_signed(Duration::seconds(seconds))
}

/// A single primitive cell value.
///
/// Blank cells are never represented; they are simply absent from the row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// A native date/time value (serial dates already decoded).
    DateTime(NaiveDateTime),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            // Integral numbers render without a trailing ".0", like a spreadsheet would.
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// One data row keyed by column header.
///
/// Column order is irrelevant; only header names matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, replacing any previous value under the same header.
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.insert(column, value);
        self
    }

    /// Builder-style helper for text cells.
    #[must_use]
    pub fn with_text(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(column, CellValue::Text(value.into()))
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Cell rendered as text, `None` when the cell is absent or blank.
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column)
            .map(ToString::to_string)
            .filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
