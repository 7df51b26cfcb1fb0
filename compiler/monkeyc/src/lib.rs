//! Monkey interpreter driver.
//!
//! The `monkey` binary is a thin argument switch over this library: an
//! interactive [`Repl`] plus the file [`commands`]. Everything writes through
//! caller-supplied sinks so it can be exercised without a terminal.

pub mod commands;
pub mod config;
mod repl;

use std::sync::Once;

pub use config::{Config, ConfigError, LogFormat};
pub use repl::{Repl, PROMPT};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so an ordinary run pays no
/// logging cost. Safe to call more than once.
pub fn init_tracing(format: LogFormat) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let (tree, flat) = match format {
            LogFormat::Tree => (
                Some(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                ),
                None,
            ),
            LogFormat::Flat => (
                None,
                Some(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                ),
            ),
        };
        tracing_subscriber::registry()
            .with(filter)
            .with(tree)
            .with(flat)
            .init();
    });
}
