//! Shared pieces of the `sheetsmith` and `sanitize` binaries.

pub mod cli;
pub mod commands;
pub mod logging;
