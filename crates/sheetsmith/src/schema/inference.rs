//! Column type inference.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. `Integer`: every cell is a whole number and none are missing.
//! 2. `Boolean`: every cell is a boolean and none are missing.
//! 3. `Timestamp`: every non-missing cell is a date/time, with at least one.
//! 4. `Text`: everything else, including empty columns.
//!
//! A missing cell disqualifies `Integer` and `Boolean` because the source
//! reader stores such columns with a floating or object kind.

use tracing::debug;

use super::emitter::ColumnDefinition;
use super::types::ColumnType;
use crate::input::{CellValue, Table};

/// Classify a column's values.
pub fn infer_column_type(values: &[CellValue]) -> ColumnType {
    if values.is_empty() {
        return ColumnType::Text;
    }

    if values.iter().all(|v| matches!(v, CellValue::Int(_))) {
        return ColumnType::Integer;
    }

    if values.iter().all(|v| matches!(v, CellValue::Bool(_))) {
        return ColumnType::Boolean;
    }

    let mut present = values.iter().filter(|v| !v.is_empty()).peekable();
    if present.peek().is_some() && present.all(|v| matches!(v, CellValue::DateTime(_))) {
        return ColumnType::Timestamp;
    }

    ColumnType::Text
}

/// Infer a definition for every column of a table, in order.
pub fn infer_table(table: &Table) -> Vec<ColumnDefinition> {
    table
        .columns()
        .iter()
        .map(|column| {
            let column_type = infer_column_type(&column.values);
            debug!(column = %column.name, %column_type, "inferred column type");
            ColumnDefinition::new(&column.name, column_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Column;
    use chrono::NaiveDate;

    fn ints(values: &[i64]) -> Vec<CellValue> {
        values.iter().map(|&i| CellValue::Int(i)).collect()
    }

    fn timestamp(day: u32) -> CellValue {
        CellValue::DateTime(
            NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_infer_integer() {
        assert_eq!(infer_column_type(&ints(&[1, 2, 3])), ColumnType::Integer);
    }

    #[test]
    fn test_one_float_demotes_integer_to_text() {
        let mut values = ints(&[1, 2, 3]);
        values.push(CellValue::Float(2.5));
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn test_one_string_demotes_integer_to_text() {
        let mut values = ints(&[1, 2]);
        values.push(CellValue::Text("three".to_string()));
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn test_missing_cell_demotes_integer() {
        let mut values = ints(&[1, 2]);
        values.push(CellValue::Empty);
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn test_infer_boolean() {
        let values = vec![
            CellValue::Bool(true),
            CellValue::Bool(false),
            CellValue::Bool(true),
        ];
        assert_eq!(infer_column_type(&values), ColumnType::Boolean);
    }

    #[test]
    fn test_mixed_bool_and_int_is_text() {
        let values = vec![CellValue::Bool(true), CellValue::Int(0)];
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn test_infer_timestamp() {
        let values = vec![timestamp(1), timestamp(2)];
        assert_eq!(infer_column_type(&values), ColumnType::Timestamp);
    }

    #[test]
    fn test_timestamp_tolerates_missing() {
        let values = vec![timestamp(1), CellValue::Empty, timestamp(3)];
        assert_eq!(infer_column_type(&values), ColumnType::Timestamp);
    }

    #[test]
    fn test_floats_are_text() {
        let values = vec![CellValue::Float(1.5), CellValue::Float(2.25)];
        assert_eq!(infer_column_type(&values), ColumnType::Text);
    }

    #[test]
    fn test_empty_and_all_missing_columns_are_text() {
        assert_eq!(infer_column_type(&[]), ColumnType::Text);
        assert_eq!(
            infer_column_type(&[CellValue::Empty, CellValue::Empty]),
            ColumnType::Text
        );
    }

    #[test]
    fn test_infer_table_preserves_order() {
        let table = Table::new(vec![
            Column::new("qty", ints(&[1, 2, 3])),
            Column::new(
                "active",
                vec![
                    CellValue::Bool(true),
                    CellValue::Bool(false),
                    CellValue::Bool(true),
                ],
            ),
            Column::new(
                "note",
                vec![
                    CellValue::Text("a".to_string()),
                    CellValue::Text("b".to_string()),
                    CellValue::Text("c".to_string()),
                ],
            ),
        ]);

        let types: Vec<ColumnType> = infer_table(&table)
            .into_iter()
            .map(|d| d.column_type)
            .collect();

        assert_eq!(
            types,
            vec![ColumnType::Integer, ColumnType::Boolean, ColumnType::Text]
        );
    }
}
