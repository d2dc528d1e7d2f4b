//! Low-level building blocks for the Alan lexer.
//!
//! - [`Cursor`]: a character cursor over `&str` that tracks 1-based
//!   line/column as it advances and offers one-character lookahead.
//! - [`class`]: the character classes the scanner dispatches on.
//!
//! Nothing here knows about tokens or keywords; those belong to
//! `alan_lexer`.

pub mod class;
mod cursor;

pub use cursor::Cursor;
