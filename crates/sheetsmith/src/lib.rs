//! Sheetsmith: spreadsheet to CSV conversion with CREATE TABLE inference,
//! plus a sanitizer for invisible characters in text files.
//!
//! # Converting a spreadsheet
//!
//! ```no_run
//! use sheetsmith::Converter;
//!
//! let result = Converter::new().convert("people.xlsx").unwrap();
//!
//! println!("CSV written to {}", result.csv_path.display());
//! println!("{}", result.statement);
//! ```
//!
//! # Sanitizing a file
//!
//! ```no_run
//! use sheetsmith::{sanitize_file, SanitizationRuleSet};
//!
//! let report = sanitize_file("routes/people.js", &SanitizationRuleSet::INVISIBLE).unwrap();
//! println!("Removed {} characters", report.removed());
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod schema;

mod converter;
mod sanitize;

pub use crate::converter::{
    csv_path_for, describe, table_name_for, ConversionResult, Converter, ConverterConfig,
};
pub use crate::sanitize::{sanitize, sanitize_file, SanitizationRuleSet, SanitizeReport};
pub use error::{Result, SheetsmithError};
pub use input::{CellValue, Column, Loader, LoaderConfig, Table};
pub use output::{TableWriter, WriterConfig};
pub use schema::{
    emit_create_table, infer_column_type, normalize_column_name, ColumnDefinition, ColumnType,
};
