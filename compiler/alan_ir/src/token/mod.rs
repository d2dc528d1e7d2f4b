//! Token types for the Alan lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Position;

/// A token with its source text and starting position.
///
/// Tokens are immutable once the lexer creates them.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source substring this token was built from.
    pub lexeme: String,
    /// Position of the token's first character.
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    #[inline]
    pub fn is_eop(&self) -> bool {
        self.kind == TokenKind::Eop
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {:?}", self.kind, self.lexeme, self.position)
    }
}

/// Listing form: `INT [ int ] found at (6:3)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [ {} ] found at {}",
            self.kind, self.lexeme, self.position
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}
