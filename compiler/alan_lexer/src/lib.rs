//! Lexer for Alan.
//!
//! Converts source text into `$`-terminated [`Program`]s of position-tagged
//! [`Token`]s. A single file may hold many programs; each carries its own
//! error tally.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Cursor (alan_lexer_core) ──► Scanner ──► LexOutput
//!                                          │
//!                                          └──► DiagnosticSink (alan_diagnostic)
//! ```
//!
//! Scanning never aborts. Bad characters are reported, skipped, and counted
//! against the current program.

pub mod grammar;
mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};

use alan_diagnostic::DiagnosticSink;
use alan_ir::{Program, Token};

/// Everything one scan produced.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    /// Completed programs, in the order their `$` was reached.
    pub programs: Vec<Program>,
    /// Every lexical error, in source order, including any after the last `$`.
    pub errors: Vec<LexError>,
    /// Tokens scanned after the last `$`. They never form a program; callers
    /// decide whether that deserves a diagnostic.
    pub discarded: Vec<Token>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Programs whose error tally is non-zero.
    pub fn failed_programs(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter().filter(|p| !p.is_ok())
    }

    /// Total tokens across all completed programs.
    pub fn token_count(&self) -> usize {
        self.programs.iter().map(Program::len).sum()
    }
}

/// Lex source code into programs.
///
/// Trace, info, warning, and error diagnostics are emitted to `sink` as the
/// scan proceeds; what gets shown is the sink's decision.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, sink: &mut dyn DiagnosticSink) -> LexOutput {
    let output = scanner::Scanner::new(source, sink).run();
    tracing::debug!(
        programs = output.programs.len(),
        errors = output.errors.len(),
        discarded = output.discarded.len(),
        "lex complete"
    );
    output
}
