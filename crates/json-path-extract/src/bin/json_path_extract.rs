//! `json-path-extract`: evaluate a slash path against a JSON document.
//!
//! Usage:
//!   json-path-extract '<path>' [--flat] [--tolerant] [--verbose]
//!
//! The document is read from stdin. The path is the first argument.

use json_path_extract::cli::{extract, init_tracing, CliArgs};
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = match CliArgs::parse(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    init_tracing(args.options.verbose_trace);

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match extract(buf.trim(), &args) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
