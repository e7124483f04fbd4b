//! Sable CLI
//!
//! Lex a source file, or run the interactive token REPL.

use sablec::{commands, repl};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("repl") => {
            if let Err(err) = repl::run() {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Some("lex") => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: sable lex <file.sb>");
                std::process::exit(1);
            };
            if let Err(err) = commands::lex_file(path) {
                eprintln!("error: {path}: {err}");
                std::process::exit(1);
            }
        }
        Some("help" | "--help" | "-h") => print_usage(),
        Some(other) => {
            eprintln!("error: unknown command {other:?}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: sable [command]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file.sb>   Tokenize a file and print the token stream");
    eprintln!("  repl            Interactive token REPL (the default)");
}
