//! MAL command-line driver.
//!
//! Argument parsing, the interactive loop and script mode live here so the
//! `mal` binary stays a thin shell over them.

pub mod options;
pub mod repl;

pub use options::{parse_options, Options, OptionsError};
pub use repl::{run_file, run_repl, PROMPT};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
///
/// ```bash
/// RUST_LOG=mal_eval=debug mal script.mal
/// RUST_LOG=mal_eval::interpreter=trace mal
/// ```
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
