//! Indentation bookkeeping for block structure.
//!
//! A stack of indentation widths, bottom pinned at zero. Outside an
//! in-progress dedent resolution the stack is strictly increasing from
//! bottom to top, and after each line is resolved the top equals that
//! line's width. The grammar turns each [`Resolution`] into the
//! corresponding `Indent`/`Dedent` emissions.

use smallvec::{smallvec, SmallVec};

/// How one line's indentation width relates to the open blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Deeper than the current block: one new block opens.
    Indent,
    /// Same width as the current block: no block change.
    Steady,
    /// Shallower, landing exactly on an enclosing level: this many
    /// blocks close.
    Dedent(usize),
    /// Shallower, but no enclosing block has this width.
    Mismatch,
}

#[derive(Clone, Debug)]
pub(crate) struct IndentStack {
    levels: SmallVec<[usize; 8]>,
}

impl IndentStack {
    pub(crate) fn new() -> Self {
        Self {
            levels: smallvec![0],
        }
    }

    /// The width of the innermost open block. The bottom level is the
    /// module level, width zero.
    fn top(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Resolve one line's indentation width against the open blocks.
    pub(crate) fn resolve(&mut self, width: usize) -> Resolution {
        let top = self.top();
        if width > top {
            self.levels.push(width);
            return Resolution::Indent;
        }
        if width == top {
            return Resolution::Steady;
        }
        let mut pops = 0;
        while self.top() > width {
            self.levels.pop();
            pops += 1;
        }
        if self.top() == width {
            Resolution::Dedent(pops)
        } else {
            Resolution::Mismatch
        }
    }

    /// Close every block still open. Returns how many were closed.
    pub(crate) fn close_all(&mut self) -> usize {
        let open = self.levels.len() - 1;
        self.levels.truncate(1);
        open
    }
}
