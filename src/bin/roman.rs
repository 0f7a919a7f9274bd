use std::env;
use std::process::ExitCode;

use colored::Colorize;

use design_patterns::{interpret, logging};

fn main() -> ExitCode {
    logging::init(0);

    let numerals: Vec<String> = env::args().skip(1).collect();
    if numerals.is_empty() {
        eprintln!("usage: roman <numeral>...");
        return ExitCode::FAILURE;
    }

    let mut failed = false;
    for numeral in &numerals {
        match interpret(numeral) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
