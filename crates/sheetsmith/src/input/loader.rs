//! Workbook loader built on calamine.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, ExcelDateTime, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use super::table::{CellValue, Column, Table};
use crate::error::{Result, SheetsmithError};

/// Largest magnitude at which every whole `f64` is exactly representable.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Loader configuration.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Worksheet to read (None = first sheet).
    pub sheet: Option<String>,
}

/// Reads spreadsheets into a [`Table`].
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a new loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a workbook and return its selected worksheet as a table.
    ///
    /// The format (xlsx, xlsm, xlsb, xls, ods) is chosen from the file
    /// extension. The first row of the sheet is the header row.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Table> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SheetsmithError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut workbook =
            open_workbook_auto(path).map_err(|e| SheetsmithError::source_read(path, e))?;

        let range = match &self.config.sheet {
            Some(name) => workbook
                .worksheet_range(name)
                .map_err(|e| SheetsmithError::source_read(path, e))?,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| SheetsmithError::source_read(path, "no worksheet found"))?
                .map_err(|e| SheetsmithError::source_read(path, e))?,
        };

        let (height, width) = range.get_size();
        debug!(path = %path.display(), height, width, "read worksheet range");

        Ok(table_from_range(&range))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a worksheet range into a table, using the first row as headers.
pub(crate) fn table_from_range(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Table::default();
    };

    let headers = dedupe_headers(
        header_row
            .iter()
            .enumerate()
            .map(|(idx, cell)| header_name(idx, cell))
            .collect(),
    );

    let mut data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    // Formatting-only rows at the bottom of a sheet still widen the range.
    while data
        .last()
        .is_some_and(|row| row.iter().all(CellValue::is_empty))
    {
        data.pop();
    }

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column::new(name, Vec::with_capacity(data.len())))
        .collect();

    for row in data {
        for (column, value) in columns.iter_mut().zip(row) {
            column.values.push(value);
        }
    }

    Table::new(columns)
}

/// Convert a single worksheet cell.
pub(crate) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < MAX_EXACT_FLOAT {
                CellValue::Int(*f as i64)
            } else {
                CellValue::Float(*f)
            }
        }
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Text(cell.to_string()),
        Data::DateTime(dt) if dt.is_duration() || dt.as_f64() < 1.0 => {
            CellValue::Text(time_of_day(dt))
        }
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        other => other
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(other.to_string())),
    }
}

/// Render a time-only or duration serial as `HH:MM:SS`.
///
/// Serials below one day carry no date part. Durations may exceed 24 hours.
fn time_of_day(dt: &ExcelDateTime) -> String {
    let mut seconds = (dt.as_f64() * SECONDS_PER_DAY).round() as i64;
    if !dt.is_duration() {
        seconds = seconds.rem_euclid(SECONDS_PER_DAY as i64);
    }
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

/// Parse an ISO 8601 date or date-time as stored by OpenDocument sheets.
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Render a header cell as a column name.
fn header_name(index: usize, cell: &Data) -> String {
    match cell_value(cell) {
        CellValue::Empty => format!("Unnamed: {}", index),
        CellValue::Text(s) if s.is_empty() => format!("Unnamed: {}", index),
        CellValue::Text(s) => s,
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

/// Make header names unique: repeated `a` becomes `a.1`, `a.2`, ...
fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(names.len());

    for name in names {
        let mut name = name;
        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{}.{}", name, count);
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        result.push(name);
    }

    result
}
