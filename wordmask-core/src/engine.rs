// wordmask-core/src/engine.rs
//! Defines the core `Replacer` trait and the `Engine` variant type.
//!
//! The `Replacer` trait is the contract every substitution strategy adheres
//! to. `Engine` is the closed set of strategies a `FilterHandle` can run; the
//! strategy is chosen once through `EngineKind` and never changes for the
//! lifetime of a handle.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engines::trie_engine::TrieEngine;
use crate::engines::word_boundary_engine::WordBoundaryEngine;
use crate::errors::FilterError;
use crate::pattern::PatternSet;

/// A compiled, immutable matcher/substituter.
pub trait Replacer: Send + Sync {
    /// Returns a copy of `text` with every match replaced.
    fn replace(&self, text: &str) -> String;

    /// Number of patterns the replacer was compiled from.
    fn pattern_count(&self) -> usize;
}

/// Selects a substitution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Substring matching over a compressed trie.
    #[default]
    Trie,
    /// Whole-token matching on space and line-break delimiters.
    WordBoundary,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Trie => write!(f, "trie"),
            EngineKind::WordBoundary => write!(f, "word_boundary"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "trie" => Ok(EngineKind::Trie),
            "word_boundary" | "set" => Ok(EngineKind::WordBoundary),
            other => Err(format!("unknown engine '{}'", other)),
        }
    }
}

/// One compiled engine of either strategy.
#[derive(Debug)]
pub enum Engine {
    Trie(TrieEngine),
    WordBoundary(WordBoundaryEngine),
}

impl Engine {
    /// Compiles `patterns` with the strategy selected by `kind`.
    pub fn build(kind: EngineKind, patterns: &PatternSet) -> Result<Self, FilterError> {
        match kind {
            EngineKind::Trie => TrieEngine::build(patterns).map(Engine::Trie),
            EngineKind::WordBoundary => WordBoundaryEngine::build(patterns).map(Engine::WordBoundary),
        }
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Trie(_) => EngineKind::Trie,
            Engine::WordBoundary(_) => EngineKind::WordBoundary,
        }
    }
}

impl Replacer for Engine {
    fn replace(&self, text: &str) -> String {
        match self {
            Engine::Trie(e) => e.replace(text),
            Engine::WordBoundary(e) => e.replace(text),
        }
    }

    fn pattern_count(&self) -> usize {
        match self {
            Engine::Trie(e) => e.pattern_count(),
            Engine::WordBoundary(e) => e.pattern_count(),
        }
    }
}
