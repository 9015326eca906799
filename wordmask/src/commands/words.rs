// wordmask/src/commands/words.rs
//! Implementation of the `words` subcommands.

use anyhow::{Context, Result};
use log::warn;
use serde::Serialize;
use std::io::{self, Write};

use wordmask_core::{FilterConfig, WordFilter};

use crate::cli::WordsCommand;

/// Page of a namespace's list, in the shape `words list --json` prints.
#[derive(Debug, Serialize)]
pub struct BlacklistResponse {
    pub blacklist: Vec<String>,
    pub total: usize,
}

pub fn run_words(filter: &WordFilter, config: &FilterConfig, cmd: &WordsCommand) -> Result<()> {
    if !matches!(cmd, WordsCommand::List { .. }) && config.store_dir.is_none() {
        warn!("No store directory configured; changes last only for this run.");
    }

    let ns = filter.namespace();
    match cmd {
        WordsCommand::List { count, offset, json } => {
            let total = filter.count()?;
            let blacklist = filter.get(*count, *offset)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if *json {
                serde_json::to_writer(&mut out, &BlacklistResponse { blacklist, total })?;
                writeln!(out)?;
            } else {
                for word in &blacklist {
                    writeln!(out, "{}", word)?;
                }
                eprintln!("{} of {} words in '{}'.", blacklist.len(), total, ns);
            }
            out.flush()?;
        }
        WordsCommand::Add { words } => {
            filter
                .set(words)
                .with_context(|| format!("Failed to add words to '{}'", ns))?;
            eprintln!("Added {} word(s) to '{}'.", words.len(), ns);
        }
        WordsCommand::Remove { words } => {
            filter
                .delete(words)
                .with_context(|| format!("Failed to remove words from '{}'", ns))?;
            eprintln!("Removed {} word(s) from '{}'.", words.len(), ns);
        }
        WordsCommand::Replace { words } => {
            filter
                .replace(words)
                .with_context(|| format!("Failed to replace the list of '{}'", ns))?;
            eprintln!("Replaced the list of '{}' with {} word(s).", ns, words.len());
        }
        WordsCommand::Clear => {
            filter
                .empty()
                .with_context(|| format!("Failed to clear '{}'", ns))?;
            eprintln!("Cleared '{}'.", ns);
        }
    }
    Ok(())
}
