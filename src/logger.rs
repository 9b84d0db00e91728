//! Logging setup.
//!
//! Everything goes to stderr through `tracing`. Without `--verbose` only
//! errors are shown; with it, progress (`info`) and warnings appear too.
//! `RUST_LOG` overrides both.

use std::io::IsTerminal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "info" } else { "error" }
}

pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
