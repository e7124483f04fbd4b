//! Token kinds of the Sable language.

use std::fmt;

/// The language-specific token tag.
///
/// This is the `T` plugged into the toolkit's `Tag<T>`; end-of-input and
/// lexical errors are covered by the toolkit's own sentinels and have no
/// variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,
    EqEq,
    NotEq,

    // Delimiters
    LParen,
    RParen,
    Comma,
    Colon,

    // Layout
    Newline,
    /// One block opened; the value is the indentation run itself.
    Indent,
    /// One block closed; the value is empty.
    Dedent,

    // Literals and names
    Ident,
    Int,

    // Keywords
    If,
    Elif,
    Else,
    While,
    Def,
    Return,
    Pass,
    And,
    Or,
    Not,
    True,
    False,
    None,
}

impl TokenKind {
    /// Stable tag name, used by the token printer.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Assign => "Assign",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Lt => "Lt",
            TokenKind::Gt => "Gt",
            TokenKind::EqEq => "EqEq",
            TokenKind::NotEq => "NotEq",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::Newline => "Newline",
            TokenKind::Indent => "Indent",
            TokenKind::Dedent => "Dedent",
            TokenKind::Ident => "Ident",
            TokenKind::Int => "Int",
            TokenKind::If => "If",
            TokenKind::Elif => "Elif",
            TokenKind::Else => "Else",
            TokenKind::While => "While",
            TokenKind::Def => "Def",
            TokenKind::Return => "Return",
            TokenKind::Pass => "Pass",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::None => "None",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
