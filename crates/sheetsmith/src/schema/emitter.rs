//! CREATE TABLE statement rendering.

use serde::Serialize;

use super::types::ColumnType;
use crate::error::{Result, SheetsmithError};

/// Indentation before each column definition.
const INDENT: &str = "    ";

/// A column name paired with its inferred type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    /// Column name as it appears in the source header.
    pub name: String,
    /// Inferred type.
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    /// Create a new column definition.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }

    /// Render as `"<normalized name>" <TYPE>`.
    pub fn to_sql(&self) -> String {
        format!(
            "\"{}\" {}",
            normalize_column_name(&self.name),
            self.column_type.sql_keyword()
        )
    }
}

/// Turn a header into a safe SQL identifier body.
///
/// `.`, space and `-` become `_` (in that order) and the result is
/// lower-cased. Applying it twice gives the same result as applying it once.
pub fn normalize_column_name(name: &str) -> String {
    name.replace('.', "_")
        .replace(' ', "_")
        .replace('-', "_")
        .to_lowercase()
}

/// Render a CREATE TABLE statement.
///
/// `table_name` is emitted verbatim. An empty column list is rejected since
/// it cannot form a valid statement.
pub fn emit_create_table(table_name: &str, columns: &[ColumnDefinition]) -> Result<String> {
    if columns.is_empty() {
        return Err(SheetsmithError::EmptySchema {
            table: table_name.to_string(),
        });
    }

    let definitions: Vec<String> = columns.iter().map(ColumnDefinition::to_sql).collect();
    let separator = format!(",\n{}", INDENT);

    Ok(format!(
        "CREATE TABLE {} (\n{}{}\n);",
        table_name,
        INDENT,
        definitions.join(&separator)
    ))
}
