//! Sable command-line front end.
//!
//! Thin collaborators around the lexer: a file-lexing command, a token
//! pretty-printer, and a line-buffering REPL. Everything here consumes
//! the public token stream only — no scanner internals.

pub mod commands;
pub mod printer;
pub mod repl;
