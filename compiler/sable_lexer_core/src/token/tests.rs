use std::fmt;

use pretty_assertions::assert_eq;

use crate::{Tag, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Sym {
    Plus,
}

impl fmt::Display for Sym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sym::Plus => f.pad("Plus"),
        }
    }
}

// === Constructors ===

#[test]
fn lang_token_borrows_its_lexeme() {
    let token = Token::lang(Sym::Plus, "+");
    assert_eq!(token.tag, Tag::Lang(Sym::Plus));
    assert_eq!(token.value, "+");
}

#[test]
fn eof_token_has_empty_value() {
    let token: Token<'_, Sym> = Token::eof();
    assert_eq!(token.tag, Tag::Eof);
    assert_eq!(token.value, "");
}

#[test]
fn illegal_token_carries_its_message() {
    let token: Token<'_, Sym> = Token::illegal("bad number syntax: \"5x\"");
    assert_eq!(token.tag, Tag::Illegal);
    assert_eq!(token.value, "bad number syntax: \"5x\"");
}

// === Predicates ===

#[test]
fn sentinel_predicates() {
    let lang = Token::lang(Sym::Plus, "+");
    let eof: Token<'_, Sym> = Token::eof();
    let illegal: Token<'_, Sym> = Token::illegal("boom");

    assert!(!lang.is_terminal());
    assert!(eof.is_eof() && eof.is_terminal());
    assert!(illegal.is_illegal() && illegal.is_terminal());
    assert!(!eof.is_illegal());
    assert!(!illegal.is_eof());
}

// === Display ===

#[test]
fn tag_display_renders_sentinel_names() {
    assert_eq!(Tag::<Sym>::Eof.to_string(), "EOF");
    assert_eq!(Tag::<Sym>::Illegal.to_string(), "ILLEGAL");
    assert_eq!(Tag::Lang(Sym::Plus).to_string(), "Plus");
}

#[test]
fn tag_display_honors_padding() {
    assert_eq!(format!("{:<8}|", Tag::<Sym>::Eof), "EOF     |");
    assert_eq!(format!("{:<8}|", Tag::Lang(Sym::Plus)), "Plus    |");
}
