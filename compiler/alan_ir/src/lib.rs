//! Alan IR - shared data model for the front end.
//!
//! This crate contains the types every phase agrees on:
//! - [`Position`] for 1-based line/column source locations
//! - [`Token`] and [`TokenKind`] for lexer output
//! - [`Program`] for one `$`-terminated token sequence
//!
//! Every type derives `Clone, Eq, PartialEq, Hash, Debug` so results can be
//! compared directly in tests and cached by later phases.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod program;
mod token;

pub use position::Position;
pub use program::Program;
pub use token::{Token, TokenKind};
