// wordmask-core/src/wordlist/mod.rs
//! Word list storage.
//!
//! A `WordListStore` keeps one sorted set of words per namespace (usually a
//! language tag such as `en_US`). Pages returned by `get` follow lexicographic
//! order so that `count`/`offset` pagination is stable.
//!
//! Two backends are provided: [`MemoryWordList`] and the directory-backed
//! [`FileWordList`].

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileWordList;
pub use memory::MemoryWordList;

/// Failures reported by a word list backend. The core never retries them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    #[error("Invalid namespace '{0}'")]
    InvalidNamespace(String),

    #[error("Invalid word {0:?}: words must be non-empty and contain no line breaks")]
    InvalidWord(String),

    #[error("Word list I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage for per-namespace word lists.
pub trait WordListStore: Send + Sync {
    /// Total number of words in `namespace`.
    fn count(&self, namespace: &str) -> Result<usize, StoreError>;

    /// Up to `count` words starting at `offset`, in lexicographic order.
    fn get(&self, namespace: &str, count: usize, offset: usize) -> Result<Vec<String>, StoreError>;

    /// Adds `words`; words already present are left alone.
    fn set(&self, namespace: &str, words: &[String]) -> Result<(), StoreError>;

    /// Removes `words`; absent words are ignored.
    fn delete(&self, namespace: &str, words: &[String]) -> Result<(), StoreError>;

    /// Replaces the whole list with `words`.
    fn replace(&self, namespace: &str, words: &[String]) -> Result<(), StoreError>;

    /// Removes every word in `namespace`.
    fn empty(&self, namespace: &str) -> Result<(), StoreError>;

    /// Every word in `namespace`.
    fn dump(&self, namespace: &str) -> Result<Vec<String>, StoreError> {
        let count = self.count(namespace)?;
        self.get(namespace, count, 0)
    }
}

/// Rejects empty words and words containing line breaks.
pub(crate) fn validate_words(words: &[String]) -> Result<(), StoreError> {
    match words
        .iter()
        .find(|w| w.is_empty() || w.contains(['\n', '\r']))
    {
        Some(bad) => Err(StoreError::InvalidWord(bad.clone())),
        None => Ok(()),
    }
}

/// Reads a newline-separated word list, skipping blank lines.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();
    debug!("Read {} words from {}.", words.len(), path.display());
    Ok(words)
}
