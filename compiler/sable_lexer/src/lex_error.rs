//! Lexical error cases.
//!
//! Errors are data in the token stream, not `Err` returns: the grammar
//! renders one of these into an `Illegal` token's value and the stream
//! stops there. There is no skip-and-resynchronize recovery, and no
//! case is ever coerced into a best-effort token.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A character no grammar rule recognizes.
    #[error("unrecognized character {0:?}")]
    UnrecognizedChar(char),

    /// `!` only begins `!=`; a lone `!` is not a token.
    #[error("unexpected character '!': expected \"!=\"")]
    LoneBang,

    /// A digit run ran straight into a letter, e.g. `5x`.
    #[error("bad number syntax: {0:?}")]
    BadNumber(String),

    /// A dedent resolved to a width matching no enclosing block.
    #[error("inconsistent dedent: width {0} matches no enclosing block")]
    InconsistentDedent(usize),
}
