//! CSV output.

mod writer;

pub use writer::{TableWriter, WriterConfig};
