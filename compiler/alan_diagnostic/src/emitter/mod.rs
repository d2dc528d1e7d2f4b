//! Diagnostic emitters.
//!
//! Renderers that implement [`DiagnosticSink`](crate::DiagnosticSink) on top
//! of an output stream.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};
