//! Terminal Emitter
//!
//! Line-oriented, human-readable output with optional ANSI color support:
//!
//! ```text
//! INFO Lexer - Lexing program 1...
//! DEBUG Lexer - INT [ int ] found at (1:1)
//! ERROR[E0001] Lexer - unrecognized character `@` at (1:7)
//! ERROR Lexer - Lex failed with 1 error(s)
//! ```

use std::io::Write;

use crate::{Diagnostic, DiagnosticSink, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // Bold cyan
    pub const TRACE: &str = "\x1b[2m"; // Dim
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with verbosity gating and optional color support.
///
/// Warnings and errors are always written. Trace and info messages are
/// written only when the emitter is verbose (the default).
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    verbose: bool,
    /// Name of the reporting phase, printed after the level.
    component: &'static str,
    error_count: usize,
    warning_count: usize,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            verbose: true,
            component: "Lexer",
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Enable or disable trace/info output.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the component name printed on every line.
    #[must_use]
    pub fn with_component(mut self, component: &'static str) -> Self {
        self.component = component;
        self
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Coded errors written so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Warnings written so far.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// The underlying writer, for output that is not a diagnostic
    /// (banners, per-program summaries).
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flush any buffered output.
    ///
    /// A failed flush is logged with `tracing`, not returned.
    pub fn flush(&mut self) {
        if let Err(error) = self.writer.flush() {
            tracing::warn!(%error, "failed to flush diagnostic output");
        }
    }

    /// Emit a summary of errors/warnings seen by this emitter.
    ///
    /// Writes nothing when there were none.
    pub fn emit_summary(&mut self) {
        let (errors, warnings) = (self.error_count, self.warning_count);
        if errors == 0 && warnings == 0 {
            return;
        }

        if errors > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(self.writer, ": {errors} error{}", plural_s(errors));
            if warnings > 0 {
                let _ = write!(self.writer, ", {warnings} warning{}", plural_s(warnings));
            }
            let _ = writeln!(self.writer, " emitted");
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(self.writer, ": {warnings} warning{} emitted", plural_s(warnings));
        }
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Info => colors::INFO,
            Severity::Trace => colors::TRACE,
        };
        self.write_colored(severity.label(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }
}

impl<W: Write> DiagnosticSink for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        if !self.verbose && !diagnostic.severity.is_always_shown() {
            return;
        }

        match diagnostic.severity {
            Severity::Error if diagnostic.code.is_some() => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            _ => {}
        }

        // Header: LEVEL[CODE] Component - message
        self.write_severity(diagnostic.severity);
        if let Some(code) = diagnostic.code {
            self.write_code(code.as_str());
        }
        let _ = writeln!(self.writer, " {} - {diagnostic}", self.component);
    }
}
