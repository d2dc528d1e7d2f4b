//! Diagnostic system for leveled compiler messages.
//!
//! Every phase reports through a [`DiagnosticSink`]. A diagnostic carries:
//! - a [`Severity`] (trace, info, warning, error)
//! - an optional [`ErrorCode`] for searchability (`alanc explain E0001`)
//! - a message and, when it points at source, a [`Position`](alan_ir::Position)
//!
//! Phases never decide what is shown. Verbosity is a property of the sink:
//! [`TerminalEmitter`](emitter::TerminalEmitter) always renders warnings and
//! errors and renders trace/info only when verbose, while
//! [`DiagnosticQueue`](queue::DiagnosticQueue) keeps everything.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;

/// A destination for diagnostics.
///
/// Implementors own buffering, filtering, and formatting. Callers emit and
/// move on.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}
