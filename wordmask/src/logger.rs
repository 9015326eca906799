// wordmask/src/logger.rs
//! Logger setup for the CLI.
//!
//! Logs go to stderr so they never mix with sanitized output on stdout.
//! `RUST_LOG` is honored unless an explicit level is passed.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`. Calling it twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
