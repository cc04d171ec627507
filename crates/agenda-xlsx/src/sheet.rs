//! Worksheet decoding: metadata cell, header row and data rows.

use std::io::Cursor;

use agenda_core::{CellValue, RawRow, excel_serial_to_datetime};
use calamine::{Data, Range, Reader, Xlsx};

use crate::LoadError;

/// Zero-based row holding the column names (row 3 in the sheet).
pub const HEADER_ROW: u32 = 2;

/// Zero-based (row, column) of the "last updated" cell, `D1`.
pub const LAST_UPDATED_CELL: (u32, u32) = (0, 3);

/// Rows and metadata read from the first worksheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetData {
    pub last_updated: Option<CellValue>,
    pub rows: Vec<RawRow>,
}

/// Decodes xlsx bytes and reads the first worksheet.
pub fn decode(bytes: Vec<u8>) -> Result<SheetData, LoadError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let Some(first) = workbook.sheet_names().into_iter().next() else {
        return Err(LoadError::NoSheets);
    };
    tracing::debug!(sheet = %first, "reading worksheet");
    let range = workbook.worksheet_range(&first)?;
    read_range(&range)
}

/// Reads the metadata cell and the table below the header row.
///
/// Coordinates are absolute, so a used range that does not start at `A1`
/// is handled. Fully blank rows are skipped; blank cells are left out of
/// their row.
pub fn read_range(range: &Range<Data>) -> Result<SheetData, LoadError> {
    let missing_header = || LoadError::MissingHeader {
        row: HEADER_ROW + 1,
    };
    let (Some((_, first_col)), Some((last_row, last_col))) = (range.start(), range.end()) else {
        return Err(missing_header());
    };

    let headers: Vec<(u32, String)> = (first_col..=last_col)
        .filter_map(|col| {
            let name = range
                .get_value((HEADER_ROW, col))
                .and_then(cell_value)?
                .to_string();
            let name = name.trim();
            (!name.is_empty()).then(|| (col, name.to_string()))
        })
        .collect();
    if headers.is_empty() {
        return Err(missing_header());
    }

    let mut rows = Vec::new();
    for row_idx in (HEADER_ROW + 1)..=last_row {
        let mut row = RawRow::new();
        for (col, name) in &headers {
            if let Some(value) = range.get_value((row_idx, *col)).and_then(cell_value) {
                row.insert(name.clone(), value);
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    let last_updated = range.get_value(LAST_UPDATED_CELL).and_then(cell_value);
    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        has_last_updated = last_updated.is_some(),
        "decoded worksheet"
    );
    Ok(SheetData { last_updated, rows })
}

/// Maps a calamine cell to a primitive value; blank and error cells are `None`.
#[expect(
    clippy::cast_precision_loss,
    reason = "integer cells in a schedule are small"
)]
fn cell_value(data: &Data) -> Option<CellValue> {
    match data {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            Some(CellValue::Text(s.clone()))
        }
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            Some(excel_serial_to_datetime(serial).map_or(CellValue::Number(serial), CellValue::DateTime))
        }
        Data::Error(e) => {
            tracing::trace!(error = ?e, "skipping error cell");
            None
        }
    }
}
