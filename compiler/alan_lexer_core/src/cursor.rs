//! Character cursor with line/column tracking.
//!
//! The cursor walks a `&str` one `char` at a time. Every advance updates
//! the 1-based line and column, so callers can stamp tokens and
//! diagnostics without re-scanning the source. A `\n` moves to column 1
//! of the next line; every other character (including `\r`) moves one
//! column right.
//!
//! Bulk skipping (block comment bodies) uses `memchr` to find the closing
//! marker and to count the newlines it jumps over.

use memchr::memmem;

/// Saturating `usize` -> `u32` for line/column arithmetic.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Character cursor over source text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for lookahead.
///
/// # Invariant
///
/// `pos` always lies on a UTF-8 character boundary of `source`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
    /// 1-based line of the character at `pos`.
    line: u32,
    /// 1-based column (in characters) of the character at `pos`.
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume the current character and return it.
    ///
    /// Returns `None` (and does nothing) at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some(c)
    }

    /// Consume up to `n` characters, stopping early at end of input.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Skip to the next `*/` without consuming it.
    ///
    /// Returns `true` with the cursor on the `*` when a marker was found,
    /// or `false` with the cursor at end of input when none remains.
    pub fn eat_until_comment_close(&mut self) -> bool {
        let rest = self.rest().as_bytes();
        match memmem::find(rest, b"*/") {
            Some(offset) => {
                self.skip_bytes(offset);
                true
            }
            None => {
                self.skip_bytes(rest.len());
                false
            }
        }
    }

    /// Jump `n` bytes forward, recomputing line/column from the skipped text.
    ///
    /// `pos + n` must be a character boundary.
    fn skip_bytes(&mut self, n: usize) {
        let skipped = &self.source[self.pos..self.pos + n];
        let bytes = skipped.as_bytes();
        let newlines = memchr::memchr_iter(b'\n', bytes).count();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.line = self.line.saturating_add(to_u32(newlines));
                let tail = &skipped[last + 1..];
                self.column = to_u32(tail.chars().count()).saturating_add(1);
            }
            None => {
                self.column = self
                    .column
                    .saturating_add(to_u32(skipped.chars().count()));
            }
        }
        self.pos += n;
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the current character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Extract a source substring by byte offsets previously returned
    /// from [`pos()`](Self::pos).
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            start <= end && end <= self.source.len(),
            "slice {start}..{end} out of bounds for source of length {}",
            self.source.len()
        );
        &self.source[start..end]
    }
}
