//! Interactive token REPL.
//!
//! Reads physical lines from stdin, buffering until the input forms a
//! complete logical block, then prints the token stream for the whole
//! buffer. Completeness is judged by re-tokenizing the accumulated
//! buffer from scratch after every line — the token stream is
//! single-pass and cannot be rewound, and inspecting only the newest
//! line would miss a block whose header has scrolled out of it.

use std::io::{self, BufRead, Write};

use sable_lexer::{tokenize, Tag, TokenKind};
use tracing::debug;

const PROMPT: &str = ">>> ";
const CONTINUE_PROMPT: &str = "... ";

/// Run the REPL over stdin/stdout until end of input.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() {
            PROMPT
        } else {
            CONTINUE_PROMPT
        };
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        buffer.push_str(&line);

        if input_complete(&buffer) {
            crate::printer::write_tokens(&buffer, &mut out)?;
            buffer.clear();
        } else {
            debug!(buffered = buffer.len(), "input incomplete, reading more");
        }
    }
    Ok(())
}

/// Decide whether the buffered input forms a complete block.
///
/// The buffer stays open when its last expression token is a `Colon` (a
/// block header with no body yet), or when a block is still open at the
/// final `Newline` — dedents synthesized at end of input do not close a
/// block the user is mid-way through typing, only a blank line does. A
/// stream that ended in a lexical error is complete: waiting for more
/// input cannot repair it, so it is handed to the printer as-is.
fn input_complete(buffer: &str) -> bool {
    let mut last_expr: Option<TokenKind> = None;
    let mut balance = 0_i64;
    let mut balance_at_last_newline = 0_i64;
    let mut errored = false;

    for token in tokenize(buffer) {
        match token.tag {
            Tag::Lang(TokenKind::Indent) => balance += 1,
            Tag::Lang(TokenKind::Dedent) => balance -= 1,
            Tag::Lang(TokenKind::Newline) => balance_at_last_newline = balance,
            Tag::Lang(kind) => last_expr = Some(kind),
            Tag::Eof => {}
            Tag::Illegal => errored = true,
        }
    }

    if errored {
        return true;
    }
    if last_expr == Some(TokenKind::Colon) {
        return false;
    }
    balance_at_last_newline == 0 || ends_with_blank_line(buffer)
}

/// Whether the final physical line of `buffer` is blank (empty or all
/// spaces).
fn ends_with_blank_line(buffer: &str) -> bool {
    let Some(body) = buffer.strip_suffix('\n') else {
        return false;
    };
    body.chars().rev().take_while(|&c| c != '\n').all(|c| c == ' ')
}
