//! Token pretty-printing.
//!
//! Renders each token as its tag name and value, one per line. `Eof` and
//! `Illegal` print under their sentinel names, so an error report reads
//! straight out of the stream dump.

use std::io::{self, Write};

use sable_lexer::{tokenize, Token, TokenKind};

/// Render one token as `Name "value"`.
#[must_use]
pub fn render(token: &Token<'_, TokenKind>) -> String {
    format!("{:<8} {:?}", token.tag, token.value)
}

/// Tokenize `source` and write one rendered token per line.
pub fn write_tokens<W: Write>(source: &str, out: &mut W) -> io::Result<()> {
    for token in tokenize(source) {
        writeln!(out, "{}", render(&token))?;
    }
    Ok(())
}
