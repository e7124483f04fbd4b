//! The Sable grammar as a closed state machine.
//!
//! One state per lexical context, dispatched by an explicit trampoline
//! (the toolkit's driver) rather than state functions capturing the
//! scanner. The machine starts in `Indentation` so leading blank lines
//! are resolved before any expression token, and returns there after
//! every `Newline`.
//!
//! | From        | Trigger                      | To          |
//! |-------------|------------------------------|-------------|
//! | Indentation | line resolved                | Expression  |
//! | Expression  | symbol emitted               | Expression  |
//! | Expression  | letter / underscore          | Identifier  |
//! | Expression  | digit                        | Number      |
//! | Expression  | newline                      | Indentation |
//! | Expression  | end of input / illegal char  | Terminal    |
//! | Identifier  | token emitted                | Expression  |
//! | Number      | token emitted                | Expression  |

use sable_lexer_core::{Grammar, Scanner};

use crate::indent::{IndentStack, Resolution};
use crate::keywords;
use crate::lex_error::LexError;
use crate::token::TokenKind;

const DIGITS: &str = "0123456789";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Start of a logical line: resolve leading spaces into block tokens.
    Indentation,
    /// Between tokens within a line.
    Expression,
    /// Inside an identifier or keyword.
    Identifier,
    /// Inside an integer literal.
    Number,
    /// Absorbing: the stream has ended.
    Terminal,
}

pub(crate) struct BlockGrammar {
    state: State,
    indents: IndentStack,
}

impl BlockGrammar {
    pub(crate) fn new() -> Self {
        Self {
            state: State::Indentation,
            indents: IndentStack::new(),
        }
    }

    fn indentation(&mut self, s: &mut Scanner<'_, TokenKind>) -> State {
        // Fully blank lines never affect block structure.
        s.accept_run("\n");
        s.ignore();

        let width = s.accept_run(" ");
        match self.indents.resolve(width) {
            Resolution::Indent => s.emit(TokenKind::Indent),
            Resolution::Steady => s.ignore(),
            Resolution::Dedent(count) => {
                s.ignore();
                for _ in 0..count {
                    s.emit(TokenKind::Dedent);
                }
            }
            Resolution::Mismatch => {
                s.errorf(LexError::InconsistentDedent(width));
                return State::Terminal;
            }
        }
        State::Expression
    }

    fn expression(&mut self, s: &mut Scanner<'_, TokenKind>) -> State {
        let Some(c) = s.next_char() else {
            // Close any blocks still open so Indent/Dedent stay paired,
            // then finish the stream.
            for _ in 0..self.indents.close_all() {
                s.emit(TokenKind::Dedent);
            }
            s.emit_eof();
            return State::Terminal;
        };

        match c {
            ' ' => {
                s.accept_run(" ");
                s.ignore();
                State::Expression
            }
            '\n' => {
                s.emit(TokenKind::Newline);
                State::Indentation
            }
            '=' => {
                if s.accept("=") {
                    s.emit(TokenKind::EqEq);
                } else {
                    s.emit(TokenKind::Assign);
                }
                State::Expression
            }
            '!' => {
                if s.accept("=") {
                    s.emit(TokenKind::NotEq);
                    State::Expression
                } else {
                    s.errorf(LexError::LoneBang);
                    State::Terminal
                }
            }
            '+' => Self::symbol(s, TokenKind::Plus),
            '-' => Self::symbol(s, TokenKind::Minus),
            '*' => Self::symbol(s, TokenKind::Star),
            '/' => Self::symbol(s, TokenKind::Slash),
            '<' => Self::symbol(s, TokenKind::Lt),
            '>' => Self::symbol(s, TokenKind::Gt),
            '(' => Self::symbol(s, TokenKind::LParen),
            ')' => Self::symbol(s, TokenKind::RParen),
            ',' => Self::symbol(s, TokenKind::Comma),
            ':' => Self::symbol(s, TokenKind::Colon),
            c if c.is_ascii_alphabetic() || c == '_' => {
                s.back_up();
                State::Identifier
            }
            c if c.is_ascii_digit() => {
                s.back_up();
                State::Number
            }
            c => {
                s.errorf(LexError::UnrecognizedChar(c));
                State::Terminal
            }
        }
    }

    /// Single-character symbol: emit and stay in expression context.
    fn symbol(s: &mut Scanner<'_, TokenKind>, kind: TokenKind) -> State {
        s.emit(kind);
        State::Expression
    }

    fn identifier(s: &mut Scanner<'_, TokenKind>) -> State {
        while let Some(c) = s.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            s.next_char();
        }
        let kind = keywords::lookup(s.pending()).unwrap_or(TokenKind::Ident);
        s.emit(kind);
        State::Expression
    }

    fn number(s: &mut Scanner<'_, TokenKind>) -> State {
        s.accept_run(DIGITS);
        if let Some(c) = s.peek() {
            if c.is_ascii_alphabetic() || c == '_' {
                // Fold the offending character into the reported lexeme
                // rather than truncating to a shorter number.
                s.next_char();
                s.errorf(LexError::BadNumber(s.pending().to_owned()));
                return State::Terminal;
            }
        }
        s.emit(TokenKind::Int);
        State::Expression
    }
}

impl Grammar for BlockGrammar {
    type Tag = TokenKind;

    fn step(&mut self, scanner: &mut Scanner<'_, TokenKind>) -> bool {
        self.state = match self.state {
            State::Indentation => self.indentation(scanner),
            State::Expression => self.expression(scanner),
            State::Identifier => Self::identifier(scanner),
            State::Number => Self::number(scanner),
            State::Terminal => State::Terminal,
        };
        self.state != State::Terminal
    }
}
