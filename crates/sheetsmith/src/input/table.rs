//! In-memory column-oriented table.

use chrono::NaiveDateTime;

/// A single typed cell as read from a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Whole number.
    Int(i64),
    /// Floating-point number with a fractional part.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Date and/or time.
    DateTime(NaiveDateTime),
    /// Any other text, including worksheet error values.
    Text(String),
    /// Missing cell.
    Empty,
}

impl CellValue {
    /// Returns true if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header name, unique within its table.
    pub name: String,
    /// Cell values in row order.
    pub values: Vec<CellValue>,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Tabular data stored column by column.
///
/// All columns have the same number of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns, padding short columns with empty cells.
    pub fn new(mut columns: Vec<Column>) -> Self {
        let row_count = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
        for column in &mut columns {
            column.values.resize(row_count, CellValue::Empty);
        }
        Self { columns, row_count }
    }

    /// Get the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }

    /// Check if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
