//! Token and tag types shared by every grammar built on the toolkit.

use std::borrow::Cow;
use std::fmt;

/// Token tag: a language-specific tag unioned with the two universal
/// sentinels.
///
/// The sum is closed so consumers dispatch exhaustively: a match over
/// `Lang`/`Eof`/`Illegal` cannot silently miss a sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag<T> {
    /// A token of the active grammar's language.
    Lang(T),
    /// End of input. Emitted exactly once, with an empty value.
    Eof,
    /// A lexical error. The token's value holds the diagnostic message,
    /// not source text, and nothing follows it in the stream.
    Illegal,
}

impl<T: fmt::Display> fmt::Display for Tag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Lang(tag) => tag.fmt(f),
            Tag::Eof => f.pad("EOF"),
            Tag::Illegal => f.pad("ILLEGAL"),
        }
    }
}

/// A tagged unit of source text.
///
/// For `Lang` tokens the value borrows the exact `input[start..pos)` span
/// that was current at emission. `Illegal` tokens own their diagnostic
/// message instead, which is why the value is a [`Cow`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'src, T> {
    pub tag: Tag<T>,
    pub value: Cow<'src, str>,
}

impl<'src, T> Token<'src, T> {
    /// A language token spanning `value`.
    pub fn lang(tag: T, value: &'src str) -> Self {
        Self {
            tag: Tag::Lang(tag),
            value: Cow::Borrowed(value),
        }
    }

    /// The end-of-input sentinel.
    #[must_use]
    pub fn eof() -> Self {
        Self {
            tag: Tag::Eof,
            value: Cow::Borrowed(""),
        }
    }

    /// A lexical-error sentinel carrying `message`.
    pub fn illegal(message: impl Into<String>) -> Self {
        Self {
            tag: Tag::Illegal,
            value: Cow::Owned(message.into()),
        }
    }

    /// Returns `true` for the `Eof` sentinel.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self.tag, Tag::Eof)
    }

    /// Returns `true` for the `Illegal` sentinel.
    #[must_use]
    pub fn is_illegal(&self) -> bool {
        matches!(self.tag, Tag::Illegal)
    }

    /// Returns `true` for either stream-terminating sentinel.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_eof() || self.is_illegal()
    }
}

#[cfg(test)]
mod tests;
