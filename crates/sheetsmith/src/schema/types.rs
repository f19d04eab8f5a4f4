//! Core type definitions for schema representation.

use std::fmt;

use serde::Serialize;

/// Inferred SQL type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers with no missing cells.
    Integer,
    /// True/false values with no missing cells.
    Boolean,
    /// Date and/or time values.
    Timestamp,
    /// Anything else.
    Text,
}

impl ColumnType {
    /// SQL keyword used in a column definition.
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Text => "TEXT",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_keywords() {
        assert_eq!(ColumnType::Integer.to_string(), "INTEGER");
        assert_eq!(ColumnType::Boolean.to_string(), "BOOLEAN");
        assert_eq!(ColumnType::Timestamp.to_string(), "TIMESTAMP");
        assert_eq!(ColumnType::Text.to_string(), "TEXT");
    }
}
