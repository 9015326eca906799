// wordmask/src/commands/sanitize.rs
//! Implementation of the `sanitize` command.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use serde::Serialize;
use std::io::{self, Read, Write};

use wordmask_core::WordFilter;

use crate::cli::SanitizeCommand;

#[derive(Debug, Serialize)]
pub struct SanitizeResponse {
    pub text: String,
}

pub fn run_sanitize(filter: &WordFilter, cmd: &SanitizeCommand) -> Result<()> {
    let input = read_input(cmd)?;
    debug!("Sanitizing {} bytes for namespace '{}'.", input.len(), filter.namespace());
    let text = filter.sanitize(&input);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cmd.json {
        serde_json::to_writer(&mut out, &SanitizeResponse { text })?;
        writeln!(out)?;
    } else {
        out.write_all(text.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn read_input(cmd: &SanitizeCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cmd.input_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No input given. Pass TEXT, --input-file or pipe data into stdin.");
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}
