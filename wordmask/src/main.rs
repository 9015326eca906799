// wordmask/src/main.rs
//! wordmask entry point.
//!
//! Resolves configuration, opens the word list store and dispatches to the
//! selected command.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use wordmask::cli::{Cli, Commands};
use wordmask::commands::{build_registry, open_filter, resolve_config};
use wordmask::commands::sanitize::run_sanitize;
use wordmask::commands::words::run_words;
use wordmask::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    let config = resolve_config(&args.filter)?;
    let registry = build_registry(&config)?;
    let filter = open_filter(&registry, &config)?;

    match &args.command {
        Commands::Sanitize(cmd) => run_sanitize(&filter, cmd)?,
        Commands::Words(cmd) => run_words(&filter, &config, cmd)?,
    }

    Ok(())
}
