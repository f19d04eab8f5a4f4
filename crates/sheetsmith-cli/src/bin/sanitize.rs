//! sanitize - strip invisible and control characters from a text file.

use sheetsmith_cli::cli::{parse_or_exit, SanitizeCli};
use sheetsmith_cli::{commands, logging};

fn main() {
    let args: SanitizeCli = parse_or_exit();
    logging::init(args.verbose);

    commands::sanitize::run(args);
}
