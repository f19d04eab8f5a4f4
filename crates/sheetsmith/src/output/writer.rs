//! Delimited text writer for tables.

use std::path::Path;

use chrono::Timelike;
use tracing::debug;

use crate::error::{Result, SheetsmithError};
use crate::input::{CellValue, Column, Table};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Serializes a [`Table`] as UTF-8 delimited text with a header row.
pub struct TableWriter {
    config: WriterConfig,
}

impl TableWriter {
    /// Create a new writer with default configuration.
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Create a writer with custom configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn write(&self, table: &Table, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let sink_error = |source: csv::Error| SheetsmithError::SinkWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(path)
            .map_err(sink_error)?;

        writer
            .write_record(table.column_names())
            .map_err(sink_error)?;

        let styles: Vec<ColumnStyle> = table.columns().iter().map(ColumnStyle::of).collect();

        for row in 0..table.row_count() {
            let record = table
                .columns()
                .iter()
                .zip(&styles)
                .map(|(column, style)| render_cell(&column.values[row], style));
            writer.write_record(record).map_err(sink_error)?;
        }

        writer
            .flush()
            .map_err(|e| sink_error(csv::Error::from(e)))?;

        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "wrote csv"
        );

        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Column-wide rendering choices.
#[derive(Debug, Clone, Copy)]
struct ColumnStyle {
    /// Every timestamp falls on midnight, so only the date is written.
    date_only: bool,
    /// Numeric column holding a fraction or a gap; integers get a decimal point.
    floating: bool,
}

impl ColumnStyle {
    fn of(column: &Column) -> Self {
        Self {
            date_only: is_date_only(column),
            floating: is_floating(column),
        }
    }
}

/// True when all present cells are numbers and at least one is fractional
/// or missing.
fn is_floating(column: &Column) -> bool {
    let mut numeric = false;
    let mut widened = false;

    for value in &column.values {
        match value {
            CellValue::Int(_) => numeric = true,
            CellValue::Float(_) => {
                numeric = true;
                widened = true;
            }
            CellValue::Empty => widened = true,
            _ => return false,
        }
    }

    numeric && widened
}

/// True when every timestamp in the column falls exactly on midnight.
fn is_date_only(column: &Column) -> bool {
    column.values.iter().all(|v| match v {
        CellValue::DateTime(dt) => {
            dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 && dt.nanosecond() == 0
        }
        _ => true,
    })
}

/// Render one cell as a CSV field.
fn render_cell(value: &CellValue, style: &ColumnStyle) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Int(i) if style.floating => format!("{:?}", *i as f64),
        CellValue::Int(i) => i.to_string(),
        CellValue::Float(f) => format!("{:?}", f),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::DateTime(dt) if style.date_only => dt.format(DATE_FORMAT).to_string(),
        CellValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        CellValue::Text(s) => s.clone(),
    }
}
