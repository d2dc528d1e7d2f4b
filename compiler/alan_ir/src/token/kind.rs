//! Token kinds for Alan.

use std::fmt;

/// The closed set of token kinds the lexer produces.
///
/// Identifier and digit payloads live in the token's lexeme, so the kind
/// stays a one-byte `Copy` tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Keywords
    Print,
    While,
    If,
    Int,
    String,
    Boolean,
    True,
    False,

    // Symbols
    OpenBlock,  // {
    CloseBlock, // }
    OpenParen,  // (
    CloseParen, // )
    Quote,      // "

    // Operators
    Assign,   // =
    Equal,    // ==
    NotEqual, // !=
    Plus,     // +

    // Identifiers and literals
    Id,
    Digit,

    /// `$`, end of program.
    Eop,
}

impl TokenKind {
    /// Upper-case name used in token listings, e.g. `OPEN_BLOCK`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Print => "PRINT",
            TokenKind::While => "WHILE",
            TokenKind::If => "IF",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::OpenBlock => "OPEN_BLOCK",
            TokenKind::CloseBlock => "CLOSE_BLOCK",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::Quote => "QUOTE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Id => "ID",
            TokenKind::Digit => "DIGIT",
            TokenKind::Eop => "EOP",
        }
    }

    /// The fixed source text of this kind, if it has one.
    ///
    /// Returns `None` for [`Id`](Self::Id) and [`Digit`](Self::Digit), whose
    /// text varies.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Print => Some("print"),
            TokenKind::While => Some("while"),
            TokenKind::If => Some("if"),
            TokenKind::Int => Some("int"),
            TokenKind::String => Some("string"),
            TokenKind::Boolean => Some("boolean"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::OpenBlock => Some("{"),
            TokenKind::CloseBlock => Some("}"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::Quote => Some("\""),
            TokenKind::Assign => Some("="),
            TokenKind::Equal => Some("=="),
            TokenKind::NotEqual => Some("!="),
            TokenKind::Plus => Some("+"),
            TokenKind::Eop => Some("$"),
            TokenKind::Id | TokenKind::Digit => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
