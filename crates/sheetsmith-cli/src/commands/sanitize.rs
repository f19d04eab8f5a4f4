//! Sanitize command - strip invisible characters from a file in place.

use colored::Colorize;
use sheetsmith::{sanitize_file, SanitizationRuleSet, SanitizeReport, SheetsmithError};

use crate::cli::SanitizeCli;

/// Sanitize the file, reporting failures without failing the process.
///
/// Returns the report when the file was rewritten.
pub fn run(args: SanitizeCli) -> Option<SanitizeReport> {
    if !args.json {
        println!(
            "{} {}",
            "Sanitizing".cyan().bold(),
            args.file.display().to_string().white()
        );
    }

    let rules = SanitizationRuleSet::default();
    if args.verbose && !args.json {
        let listed: Vec<String> = rules
            .characters()
            .iter()
            .map(|c| format!("U+{:04X}", *c as u32))
            .collect();
        println!("Removing: {}", listed.join(" "));
    }

    match sanitize_file(&args.file, &rules) {
        Ok(report) => {
            if args.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => println!("{} {}", "Error:".red().bold(), e),
                }
            } else {
                println!(
                    "{} removed {} characters",
                    "Done:".green().bold(),
                    report.removed().to_string().white().bold()
                );
            }
            Some(report)
        }
        Err(e @ SheetsmithError::SourceNotFound { .. }) => {
            println!("{} {}", "Error:".red().bold(), e);
            None
        }
        Err(e) => {
            println!("{} {}", "I/O error:".red().bold(), e);
            None
        }
    }
}
