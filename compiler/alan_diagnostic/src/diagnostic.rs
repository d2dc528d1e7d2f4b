//! Core diagnostic types.

use alan_ir::Position;
use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics, from most to least chatty.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    /// Per-token detail.
    Trace,
    /// Progress notices (program start/end).
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Warnings and errors are shown regardless of verbosity.
    pub fn is_always_shown(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }

    /// Fixed-width-ish level label used in terminal output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Trace => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One leveled message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be emitted, not silently dropped"]
pub struct Diagnostic {
    pub severity: Severity,
    /// Present for warnings and errors that have documentation.
    pub code: Option<ErrorCode>,
    pub message: String,
    /// Source location the message is about, if any.
    pub position: Option<Position>,
}

impl Diagnostic {
    fn new(severity: Severity, code: Option<ErrorCode>, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            code,
            message: message.into(),
            position: None,
        }
    }

    pub fn trace(message: impl Into<String>) -> Self {
        Self::new(Severity::Trace, None, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, None, message)
    }

    #[cold]
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, Some(code), message)
    }

    #[cold]
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, Some(code), message)
    }

    /// An error with no code, e.g. a summary status line.
    #[cold]
    pub fn error_status(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, None, message)
    }

    /// Attach the source position the message refers to.
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// `message at (line:column)`, without the level or code.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(pos) = self.position {
            write!(f, " at {pos}")?;
        }
        Ok(())
    }
}
