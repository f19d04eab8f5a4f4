//! Column type inference and CREATE TABLE rendering.

mod emitter;
mod inference;
mod types;

pub use emitter::{emit_create_table, normalize_column_name, ColumnDefinition};
pub use inference::{infer_column_type, infer_table};
pub use types::ColumnType;
