//! Spreadsheet to CSV conversion with schema inference.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::input::{Loader, LoaderConfig, Table};
use crate::output::{TableWriter, WriterConfig};
use crate::schema::{emit_create_table, infer_table, ColumnDefinition};

/// Configuration for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// CSV writer configuration.
    pub writer: WriterConfig,
    /// CSV destination (None = source path with a `.csv` extension).
    pub output: Option<PathBuf>,
}

/// Result of converting a spreadsheet.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    /// Spreadsheet that was read.
    pub source: PathBuf,
    /// CSV file that was written.
    pub csv_path: PathBuf,
    /// Table name used in the statement.
    pub table_name: String,
    /// Number of data rows written.
    pub row_count: usize,
    /// Inferred column definitions, in source order.
    pub columns: Vec<ColumnDefinition>,
    /// Rendered CREATE TABLE statement.
    pub statement: String,
}

/// Converts spreadsheets into CSV plus a CREATE TABLE statement.
pub struct Converter {
    config: ConverterConfig,
    loader: Loader,
    writer: TableWriter,
}

impl Converter {
    /// Create a new converter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: ConverterConfig) -> Self {
        let loader = Loader::with_config(config.loader.clone());
        let writer = TableWriter::with_config(config.writer.clone());

        Self {
            config,
            loader,
            writer,
        }
    }

    /// Load a spreadsheet, write it as CSV and build its CREATE TABLE
    /// statement.
    ///
    /// The statement is built before anything is written, so a sheet
    /// without columns leaves no CSV behind.
    pub fn convert(&self, path: impl AsRef<Path>) -> Result<ConversionResult> {
        let path = path.as_ref();

        let table = self.loader.load(path)?;
        info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded spreadsheet"
        );

        let table_name = table_name_for(path);
        let (columns, statement) = describe(&table, &table_name)?;

        let csv_path = self
            .config
            .output
            .clone()
            .unwrap_or_else(|| csv_path_for(path));
        self.writer.write(&table, &csv_path)?;
        info!(path = %csv_path.display(), "csv written");

        Ok(ConversionResult {
            source: path.to_path_buf(),
            csv_path,
            table_name,
            row_count: table.row_count(),
            columns,
            statement,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer column types and render the statement for a loaded table.
pub fn describe(table: &Table, table_name: &str) -> Result<(Vec<ColumnDefinition>, String)> {
    let columns = infer_table(table);
    let statement = emit_create_table(table_name, &columns)?;
    Ok((columns, statement))
}

/// Default CSV path: the source path with its extension replaced.
pub fn csv_path_for(source: &Path) -> PathBuf {
    source.with_extension("csv")
}

/// Table name: the source file stem, lower-cased.
pub fn table_name_for(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
