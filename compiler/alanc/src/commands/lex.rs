//! The `lex` command: scan a file and report every program in it.

use std::io::{self, IsTerminal, Write};

use alan_diagnostic::emitter::{ColorMode, TerminalEmitter};
use alan_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use alan_ir::Program;
use alan_lexer::LexOutput;

use super::read_file;

const RULE_WIDTH: usize = 60;

/// Settings for one `lex` run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Only warnings and errors are printed.
    pub quiet: bool,
    pub color: ColorMode,
}

/// A bad `lex` command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("missing file path")]
    MissingPath,
    #[error("invalid color mode '{0}' (expected auto, always, or never)")]
    InvalidColor(String),
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

impl LexOptions {
    /// Parse the arguments that follow `lex`, returning the options and the
    /// file path.
    pub fn parse(args: &[String]) -> Result<(Self, &str), ArgError> {
        let mut options = LexOptions::default();
        let mut path = None;

        for arg in args {
            if arg == "--quiet" || arg == "-q" {
                options.quiet = true;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                options.color =
                    ColorMode::parse(mode).ok_or_else(|| ArgError::InvalidColor(mode.to_string()))?;
            } else if arg.starts_with('-') || path.is_some() {
                return Err(ArgError::Unexpected(arg.clone()));
            } else {
                path = Some(arg.as_str());
            }
        }

        let path = path.ok_or(ArgError::MissingPath)?;
        Ok((options, path))
    }
}

/// What a `lex` run found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexReport {
    pub programs: usize,
    pub failed_programs: usize,
    /// Coded errors written to the terminal.
    pub errors: usize,
    pub warnings: usize,
}

impl LexReport {
    pub fn is_success(&self) -> bool {
        self.failed_programs == 0 && self.errors == 0
    }

    /// Process exit status for this run.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }
}

/// Lex a file, print the results to stdout, and exit with status 1 on
/// failure.
pub fn lex_file(path: &str, options: LexOptions) {
    let content = read_file(path);
    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let report = lex_source(path, &content, options, is_tty, stdout.lock());
    if !report.is_success() {
        std::process::exit(report.exit_code());
    }
}

/// Lex `source` and write the banner, diagnostics, and per-program summary
/// to `writer`.
///
/// `path` is only used for display.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path))]
pub fn lex_source<W: Write>(
    path: &str,
    source: &str,
    options: LexOptions,
    is_tty: bool,
    writer: W,
) -> LexReport {
    let mut emitter =
        TerminalEmitter::with_color_mode(writer, options.color, is_tty).with_verbose(!options.quiet);

    write_banner(emitter.writer_mut(), path);
    let output = alan_lexer::lex(source, &mut emitter);
    report_discarded(&output, &mut emitter);
    write_program_summary(emitter.writer_mut(), &output.programs);
    emitter.emit_summary();
    emitter.flush();

    let failed_programs = output.failed_programs().count();
    tracing::debug!(
        programs = output.programs.len(),
        failed_programs,
        "lex command finished"
    );

    LexReport {
        programs: output.programs.len(),
        failed_programs,
        errors: emitter.error_count(),
        warnings: emitter.warning_count(),
    }
}

fn write_banner<W: Write>(out: &mut W, path: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Alan Compiler - Lexical Analysis Phase");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Source: {path}");
    let _ = writeln!(out, "{rule}");
}

/// Tokens after the last `$` never become a program; say so.
fn report_discarded(output: &LexOutput, sink: &mut dyn DiagnosticSink) {
    let Some(first) = output.discarded.first() else {
        return;
    };
    let count = output.discarded.len();
    sink.emit(
        Diagnostic::warning(
            ErrorCode::W0002,
            format!("{count} token(s) after the last `$` were discarded, starting"),
        )
        .at(first.position),
    );
}

fn write_program_summary<W: Write>(out: &mut W, programs: &[Program]) {
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    if programs.is_empty() {
        let _ = writeln!(out, "No programs found (no `$` end-of-program marker)");
        return;
    }
    for program in programs {
        let status = if program.is_ok() {
            "passed".to_string()
        } else {
            format!("failed ({} error(s))", program.error_count)
        };
        let _ = writeln!(
            out,
            "Program {}: {} token(s), {status}",
            program.number,
            program.len()
        );
    }
}
