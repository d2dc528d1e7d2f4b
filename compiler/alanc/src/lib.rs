//! Alan compiler driver.
//!
//! The binary in `main.rs` is a thin argument dispatcher; everything it
//! runs lives in [`commands`] so integration tests can drive it directly.

use std::sync::Once;

pub mod commands;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber for internal logging.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=alan_lexer=trace alanc lex file.alan`. Safe to call more than
/// once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
