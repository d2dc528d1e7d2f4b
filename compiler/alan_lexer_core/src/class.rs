//! Character classification.
//!
//! Alan's alphabet is deliberately small: identifiers and keywords are
//! lower-case ASCII only. Anything not covered here falls through to the
//! scanner's symbol table or its unrecognized-character error.

/// `a`..=`z`. Upper-case letters and digits are not letters.
#[inline]
pub const fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// `0`..=`9`.
#[inline]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Any Unicode `White_Space` character (space, tab, `\r`, `\n`, NBSP, ...).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}
