//! Example: Convert a spreadsheet and print its inferred schema.
//!
//! Usage:
//!   cargo run --example convert -- <file_path>

use std::env;

use sheetsmith::Converter;

fn main() -> sheetsmith::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example convert -- <file_path>");
        std::process::exit(1);
    }

    let result = Converter::new().convert(&args[1])?;

    println!("## Columns ({} rows)", result.row_count);
    for column in &result.columns {
        println!("  {:30} {}", column.name, column.column_type);
    }
    println!();
    println!("## CSV");
    println!("  {}", result.csv_path.display());
    println!();
    println!("## Statement");
    println!("{}", result.statement);

    Ok(())
}
