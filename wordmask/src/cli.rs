// wordmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordmask application,
//! including all available commands and their arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordmask_core::EngineKind;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordmask",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask blacklisted words in text",
    long_about = "wordmask replaces every blacklisted word in its input with a run of stars. Word lists are kept per namespace (for example per language) and can be stored on disk between runs.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command. They override the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Path to a configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, env = "WORDMASK_CONFIG", help = "Path to a configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Select which substitution engine to use.
    #[arg(long = "engine", value_name = "ENGINE", global = true, help = "Select a substitution engine ('trie' or 'word-boundary').")]
    pub engine: Option<EngineChoice>,

    /// Directory of the file-backed word list store.
    #[arg(long = "store-dir", value_name = "DIR", global = true, env = "WORDMASK_STORE_DIR", help = "Keep word lists in this directory instead of in memory.")]
    pub store_dir: Option<PathBuf>,

    /// Namespace (language) of the word list.
    #[arg(long = "lang", value_name = "NAMESPACE", global = true, help = "Namespace of the word list, e.g. en_US.")]
    pub lang: Option<String>,

    /// Newline-separated word list that replaces the namespace's list.
    #[arg(long = "wordlist", value_name = "FILE", global = true, help = "Load a newline-separated word list into the namespace.")]
    pub wordlist: Option<PathBuf>,
}

/// All available commands for the `wordmask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes text, a file or stdin.
    #[command(about = "Sanitizes text, an input file or stdin, masking blacklisted words.")]
    Sanitize(SanitizeCommand),

    /// Manages the stored word lists.
    #[command(subcommand, about = "Lists or edits the stored word list of a namespace.")]
    Words(WordsCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Text to sanitize. Reads the input file or stdin when omitted.
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    /// Path to an input file.
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print `{"text": ...}` instead of plain text.
    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,
}

/// Subcommands for the `words` command.
#[derive(Subcommand, Debug)]
pub enum WordsCommand {
    #[command(about = "Prints a page of the word list and its total size.")]
    List {
        /// Number of words to print.
        #[arg(long, default_value_t = 20)]
        count: usize,
        /// Index of the first word to print.
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Print `{"blacklist": [...], "total": n}`.
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Adds words to the list.")]
    Add {
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },
    #[command(about = "Removes words from the list.")]
    Remove {
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },
    #[command(about = "Replaces the whole list.")]
    Replace {
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },
    #[command(about = "Removes every word from the list.")]
    Clear,
}

/// Enum for selecting the substitution engine.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum EngineChoice {
    /// Masks blacklisted words wherever they occur, even inside other words.
    Trie,
    /// Masks only whole words separated by spaces or line breaks.
    WordBoundary,
}

impl From<EngineChoice> for EngineKind {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::Trie => EngineKind::Trie,
            EngineChoice::WordBoundary => EngineKind::WordBoundary,
        }
    }
}
