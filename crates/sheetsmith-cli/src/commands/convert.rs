//! Convert command - spreadsheet to CSV plus CREATE TABLE statement.

use colored::Colorize;
use sheetsmith::{Converter, ConverterConfig, LoaderConfig};

use crate::cli::ConvertCli;

pub fn run(args: ConvertCli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConverterConfig {
        loader: LoaderConfig { sheet: args.sheet },
        output: args.output,
        ..ConverterConfig::default()
    };

    let result = Converter::with_config(config).convert(&args.file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if args.verbose {
        println!("{}", "Columns:".yellow().bold());
        for column in &result.columns {
            println!("  {:30} {}", column.name, column.column_type);
        }
        println!();
    }

    println!(
        "{} {}",
        "CSV file generated:".green().bold(),
        result.csv_path.display().to_string().white()
    );
    println!();
    println!("{}", "SQL statement:".yellow().bold());
    println!("{}", result.statement);

    Ok(())
}
