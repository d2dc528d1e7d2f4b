//! Command handlers for the `alanc` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! [`read_file`] live here.

use std::io;

mod explain;
mod lex;

pub use explain::{explain_error, explanation_for};
pub use lex::{lex_file, lex_source, ArgError, LexOptions, LexReport};

/// Describe a failure to read `path` the way the CLI reports it.
pub fn read_error_message(path: &str, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}

/// Read a source file, exiting with status 1 and a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {}", read_error_message(path, &e));
            std::process::exit(1);
        }
    }
}
