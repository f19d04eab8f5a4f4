//! sheetsmith - convert a spreadsheet to CSV and infer its CREATE TABLE.

use sheetsmith_cli::cli::{parse_or_exit, ConvertCli};
use sheetsmith_cli::{commands, logging};

fn main() {
    let args: ConvertCli = parse_or_exit();
    logging::init(args.verbose);

    if let Err(e) = commands::convert::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
