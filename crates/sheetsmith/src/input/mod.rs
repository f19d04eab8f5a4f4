//! Spreadsheet input and the in-memory table model.

mod loader;
mod table;

pub use loader::{Loader, LoaderConfig};
pub use table::{CellValue, Column, Table};
