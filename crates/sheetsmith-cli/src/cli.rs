//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Convert a spreadsheet to CSV and print a CREATE TABLE statement
#[derive(Parser)]
#[command(name = "sheetsmith")]
#[command(version, about, long_about = None)]
pub struct ConvertCli {
    /// Path to the spreadsheet (xlsx, xlsm, xlsb, xls, ods)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Worksheet to convert (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Output path for the CSV file (default: <file>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Strip invisible and control characters from a text file in place
#[derive(Parser)]
#[command(name = "sanitize")]
#[command(version, about, long_about = None)]
pub struct SanitizeCli {
    /// Path to the file to clean
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still exit with status 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_requires_file() {
        assert!(ConvertCli::try_parse_from(["sheetsmith"]).is_err());
    }

    #[test]
    fn test_convert_rejects_extra_positional() {
        assert!(ConvertCli::try_parse_from(["sheetsmith", "a.xlsx", "b.xlsx"]).is_err());
    }

    #[test]
    fn test_convert_flags() {
        let cli = ConvertCli::try_parse_from([
            "sheetsmith",
            "people.xlsx",
            "--sheet",
            "Hoja1",
            "-o",
            "out.csv",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("people.xlsx"));
        assert_eq!(cli.sheet.as_deref(), Some("Hoja1"));
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert!(cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_sanitize_requires_file() {
        assert!(SanitizeCli::try_parse_from(["sanitize"]).is_err());
        let cli =
            SanitizeCli::try_parse_from(["sanitize", "routes/people.js", "-v", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json);
    }
}
