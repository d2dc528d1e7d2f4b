//! The lexical grammar table.
//!
//! ```text
//! Program          ::= Block $
//! Block            ::= { StatementList }
//! PrintStatement   ::= print ( Expr )
//! AssignStatement  ::= Id = Expr
//! VarDecl          ::= type Id
//! WhileStatement   ::= while BooleanExpr Block
//! IfStatement      ::= if BooleanExpr Block
//! IntExpr          ::= digit intop Expr | digit
//! StringExpr       ::= " CharList "
//! BooleanExpr      ::= ( Expr boolop Expr ) | boolval
//! Id               ::= char
//! type             ::= int | string | boolean
//! char             ::= a | b | c ... z
//! digit            ::= 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9
//! boolop           ::= == | !=
//! boolval          ::= false | true
//! intop            ::= +
//! ```
//!
//! Only the token-level part of this grammar is checked here. `Id ::= char`
//! is not enforced: any run of letters that is not a keyword lexes as one
//! identifier, and rejecting long names is left to a later phase.

use alan_ir::TokenKind;

/// End-of-program marker.
pub const EOP_MARKER: char = '$';

/// Block comment delimiters.
pub const COMMENT_OPEN: &str = "/*";
pub const COMMENT_CLOSE: &str = "*/";

/// Look up a reserved keyword by text.
///
/// Exact, case-sensitive, whole-word match. Returns `None` for anything
/// that should lex as an identifier.
#[inline]
pub fn keyword(text: &str) -> Option<TokenKind> {
    match text {
        "print" => Some(TokenKind::Print),
        "while" => Some(TokenKind::While),
        "if" => Some(TokenKind::If),
        "int" => Some(TokenKind::Int),
        "string" => Some(TokenKind::String),
        "boolean" => Some(TokenKind::Boolean),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        _ => None,
    }
}

/// Single-character symbols that always form a token on their own.
///
/// `=` and `!` are not listed: they need lookahead for `==` and `!=`.
#[inline]
pub fn symbol(c: char) -> Option<TokenKind> {
    match c {
        '{' => Some(TokenKind::OpenBlock),
        '}' => Some(TokenKind::CloseBlock),
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '"' => Some(TokenKind::Quote),
        '+' => Some(TokenKind::Plus),
        _ => None,
    }
}
