//! Lexer error types.
//!
//! Lexical errors are values, never panics: the scanner records one, reports
//! it, skips the offending character, and keeps going.

use alan_diagnostic::{Diagnostic, ErrorCode};
use alan_ir::Position;

/// A lexer error with its location and the program it belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("Lexer Error at {position}: {kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub position: Position,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// 1-based number of the program being scanned.
    pub program: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that is not whitespace, a letter, a digit, or a symbol.
    #[error("unrecognized character `{}`", .found.escape_debug())]
    UnrecognizedChar { found: char },
    /// `!` not immediately followed by `=`.
    #[error("expected `=` after `!`")]
    ExpectedEqAfterBang,
}

impl LexErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::UnrecognizedChar { .. } => ErrorCode::E0001,
            LexErrorKind::ExpectedEqAfterBang => ErrorCode::E0002,
        }
    }
}

impl LexError {
    pub fn new(position: Position, kind: LexErrorKind, program: u32) -> Self {
        LexError {
            position,
            kind,
            program,
        }
    }

    /// Render as a coded, positioned error diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code(), self.kind.to_string()).at(self.position)
    }
}
