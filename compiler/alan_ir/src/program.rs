//! One `$`-terminated program.

use crate::Token;

/// A completed program: every token up to and including its EOP marker.
///
/// Programs are numbered from 1 in the order their `$` was reached. A
/// program only exists once its `$` has been scanned; tokens after the
/// last `$` never become a `Program`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    /// 1-based program number.
    pub number: u32,
    /// Tokens in source order, ending with exactly one EOP token.
    pub tokens: Vec<Token>,
    /// Lexical errors recorded while this program was scanned.
    pub error_count: usize,
}

impl Program {
    pub fn new(number: u32, tokens: Vec<Token>, error_count: usize) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eop),
            "program must end with an EOP token"
        );
        Program {
            number,
            tokens,
            error_count,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error_count == 0
    }

    /// Number of tokens, the EOP marker included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
