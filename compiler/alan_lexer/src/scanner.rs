//! The multi-program scanner.
//!
//! One left-to-right pass over the source with one character of lookahead.
//! Dispatch is governed by two orthogonal pieces of state:
//!
//! - a pending word (a run of letters not yet turned into a token), and
//! - an open block comment.
//!
//! Per character, in order: skip comment bodies, recognize `/*`, extend the
//! pending word, otherwise flush the word and dispatch on the character.
//! Every `$` closes the current program and starts the next one.

use alan_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use alan_ir::{Position, Program, Token, TokenKind};
use alan_lexer_core::class::{is_digit, is_letter, is_whitespace};
use alan_lexer_core::Cursor;
use tracing::{debug, trace};

use crate::grammar::{self, EOP_MARKER};
use crate::{LexError, LexErrorKind, LexOutput};

/// Start of a run of letters that has not been flushed yet.
#[derive(Clone, Copy, Debug)]
struct PendingWord {
    /// Byte offset of the first letter.
    start: usize,
    position: Position,
}

/// Scanner state for one call to [`lex`](crate::lex).
pub(crate) struct Scanner<'src, 'sink> {
    cursor: Cursor<'src>,
    sink: &'sink mut dyn DiagnosticSink,
    word: Option<PendingWord>,
    /// Position of the `/*` of the comment we are inside, if any.
    comment: Option<Position>,
    /// Tokens of the program currently being scanned.
    pending: Vec<Token>,
    programs: Vec<Program>,
    errors: Vec<LexError>,
    /// 1-based number of the program currently being scanned.
    program_number: u32,
    /// Errors recorded since the last `$`.
    program_errors: usize,
    /// Whether the "Lexing program N..." notice went out for this program.
    announced: bool,
}

impl<'src, 'sink> Scanner<'src, 'sink> {
    pub(crate) fn new(source: &'src str, sink: &'sink mut dyn DiagnosticSink) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            sink,
            word: None,
            comment: None,
            pending: Vec::new(),
            programs: Vec::new(),
            errors: Vec::new(),
            program_number: 1,
            program_errors: 0,
            announced: false,
        }
    }

    /// Scan the whole source.
    pub(crate) fn run(mut self) -> LexOutput {
        while let Some(c) = self.cursor.current() {
            if self.comment.is_some() {
                self.skip_comment_body();
            } else if c == '/' && self.cursor.peek() == Some('*') {
                self.flush_word();
                self.open_comment();
            } else if is_letter(c) {
                self.extend_word();
            } else {
                self.flush_word();
                self.dispatch(c);
            }
        }
        self.finish()
    }

    #[inline]
    fn position(&self) -> Position {
        Position::new(self.cursor.line(), self.cursor.column())
    }

    // ─── Words ───────────────────────────────────────────────────────

    fn extend_word(&mut self) {
        if self.word.is_none() {
            self.word = Some(PendingWord {
                start: self.cursor.pos(),
                position: self.position(),
            });
        }
        self.cursor.advance();
    }

    /// Turn the pending word, if any, into exactly one keyword or ID token.
    fn flush_word(&mut self) {
        let Some(word) = self.word.take() else {
            return;
        };
        let text = self.cursor.slice(word.start, self.cursor.pos());
        let kind = grammar::keyword(text).unwrap_or(TokenKind::Id);
        self.push_token(Token::new(kind, text, word.position));
    }

    // ─── Comments ────────────────────────────────────────────────────

    fn open_comment(&mut self) {
        let start = self.position();
        trace!(%start, "block comment opened");
        self.comment = Some(start);
        self.cursor.advance_n(grammar::COMMENT_OPEN.len());
    }

    /// Discard everything up to and including the next `*/`.
    ///
    /// Leaves the comment open (and the cursor at end of input) when there
    /// is no closing marker.
    fn skip_comment_body(&mut self) {
        if self.cursor.eat_until_comment_close() {
            self.cursor.advance_n(grammar::COMMENT_CLOSE.len());
            self.comment = None;
            trace!(end = %self.position(), "block comment closed");
        }
    }

    // ─── Dispatch ────────────────────────────────────────────────────

    fn dispatch(&mut self, c: char) {
        match c {
            c if is_whitespace(c) => {
                self.cursor.advance();
            }
            c if is_digit(c) => self.single(TokenKind::Digit),
            '=' => {
                if self.cursor.peek() == Some('=') {
                    self.double(TokenKind::Equal);
                } else {
                    self.single(TokenKind::Assign);
                }
            }
            '!' => {
                if self.cursor.peek() == Some('=') {
                    self.double(TokenKind::NotEqual);
                } else {
                    let position = self.position();
                    self.cursor.advance();
                    self.report(position, LexErrorKind::ExpectedEqAfterBang);
                }
            }
            EOP_MARKER => {
                self.single(TokenKind::Eop);
                self.end_program();
            }
            c => {
                if let Some(kind) = grammar::symbol(c) {
                    self.single(kind);
                } else {
                    let position = self.position();
                    self.cursor.advance();
                    self.report(position, LexErrorKind::UnrecognizedChar { found: c });
                }
            }
        }
    }

    /// Emit a one-character token.
    fn single(&mut self, kind: TokenKind) {
        self.token_of_len(kind, 1);
    }

    /// Emit a two-character operator token.
    fn double(&mut self, kind: TokenKind) {
        self.token_of_len(kind, 2);
    }

    fn token_of_len(&mut self, kind: TokenKind, chars: usize) {
        let start = self.cursor.pos();
        let position = self.position();
        self.cursor.advance_n(chars);
        let lexeme = self.cursor.slice(start, self.cursor.pos());
        self.push_token(Token::new(kind, lexeme, position));
    }

    // ─── Reporting ───────────────────────────────────────────────────

    fn announce(&mut self) {
        if !self.announced {
            self.announced = true;
            self.sink.emit(Diagnostic::info(format!(
                "Lexing program {}...",
                self.program_number
            )));
        }
    }

    fn push_token(&mut self, token: Token) {
        self.announce();
        self.sink.emit(Diagnostic::trace(token.to_string()));
        self.pending.push(token);
    }

    fn report(&mut self, position: Position, kind: LexErrorKind) {
        self.announce();
        let error = LexError::new(position, kind, self.program_number);
        self.sink.emit(error.to_diagnostic());
        self.program_errors += 1;
        self.errors.push(error);
    }

    /// Materialize the current program after its EOP token.
    ///
    /// The pending word and comment state are left alone: a `$` can only be
    /// reached with the word already flushed and no comment open.
    fn end_program(&mut self) {
        let tokens = std::mem::take(&mut self.pending);
        let errors = self.program_errors;
        debug!(
            program = self.program_number,
            tokens = tokens.len(),
            errors,
            "program complete"
        );

        if errors == 0 {
            self.sink
                .emit(Diagnostic::info("Lex completed with 0 errors"));
        } else {
            self.sink.emit(Diagnostic::error_status(format!(
                "Lex failed with {errors} error(s)"
            )));
        }

        self.programs
            .push(Program::new(self.program_number, tokens, errors));
        self.program_number += 1;
        self.program_errors = 0;
        self.announced = false;
    }

    fn finish(mut self) -> LexOutput {
        debug_assert!(self.cursor.is_eof(), "scan stopped before end of input");
        if let Some(start) = self.comment {
            self.sink.emit(
                Diagnostic::warning(ErrorCode::W0001, "unterminated block comment starting")
                    .at(start),
            );
        } else {
            self.flush_word();
        }

        if !self.pending.is_empty() {
            debug!(
                tokens = self.pending.len(),
                "input ended without `$`; trailing tokens discarded"
            );
        }

        LexOutput {
            programs: self.programs,
            errors: self.errors,
            discarded: self.pending,
        }
    }
}

#[cfg(test)]
mod tests;
