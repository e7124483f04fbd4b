//! Lexer for the Sable language.
//!
//! Converts source text into a lazy stream of typed tokens: operators,
//! keywords, identifiers, integer literals, and the `Indent`/`Dedent`
//! pairs that carry block structure. Indentation is spaces-only — the
//! classic stack-of-widths algorithm synthesizes block delimiters at
//! each line boundary and rejects a dedent that matches no enclosing
//! block.
//!
//! Built on the generic scanner toolkit in `sable_lexer_core`; this
//! crate owns everything Sable-specific. Lexical errors surface as a
//! single `Illegal` token ending the stream, never as an `Err` return.
//!
//! ```
//! use sable_lexer::{tokenize, Tag, TokenKind};
//!
//! let tags: Vec<_> = tokenize("x = 1\n").map(|t| t.tag).collect();
//! assert_eq!(
//!     tags,
//!     vec![
//!         Tag::Lang(TokenKind::Ident),
//!         Tag::Lang(TokenKind::Assign),
//!         Tag::Lang(TokenKind::Int),
//!         Tag::Lang(TokenKind::Newline),
//!         Tag::Eof,
//!     ]
//! );
//! ```

mod grammar;
mod indent;
mod keywords;
mod lex_error;
mod token;

pub use lex_error::LexError;
pub use sable_lexer_core::{Tag, Token};
pub use token::TokenKind;

use grammar::BlockGrammar;
use sable_lexer_core::Lexer;

/// A lazy, single-pass token stream over one source text.
///
/// Terminates in exactly one `Eof` or `Illegal` token, after which the
/// iterator yields `None` forever. The stream cannot be rewound: a
/// consumer that needs to look again (a line-buffering front end, say)
/// re-tokenizes the full text with a fresh [`tokenize`] call.
pub struct Tokens<'src> {
    inner: Lexer<'src, BlockGrammar>,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src, TokenKind>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_token()
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenize `source` from the start of input.
#[must_use]
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        inner: Lexer::new(source, BlockGrammar::new()),
    }
}
