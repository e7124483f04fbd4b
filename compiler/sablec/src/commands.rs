//! CLI subcommands.

use std::fs;
use std::io::{self, Write};

use crate::printer;

/// Tokenize a file and print one token per line.
///
/// Only I/O failures are `Err`s — a lexical error is part of the token
/// stream and prints like any other token.
pub fn lex_file(path: &str) -> io::Result<()> {
    let source = fs::read_to_string(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    printer::write_tokens(&source, &mut out)?;
    out.flush()
}
