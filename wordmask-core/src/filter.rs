// wordmask-core/src/filter.rs
//! Hot-reloadable holder for the active engine.
//!
//! `FilterHandle` keeps the current engine in an `Arc` behind a `RwLock`.
//! Sanitize calls clone the `Arc` under the read lock and run outside of it,
//! so they never wait on each other. Reloads compile the new engine before
//! taking the write lock, which is held only for the pointer swap.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::engine::{Engine, EngineKind, Replacer};
use crate::errors::FilterError;
use crate::pattern::PatternSet;

/// Thread-safe owner of one namespace's compiled engine.
#[derive(Debug)]
pub struct FilterHandle {
    kind: EngineKind,
    current: RwLock<Option<Arc<Engine>>>,
    generation: AtomicU64,
}

impl FilterHandle {
    /// Creates an empty handle. Until the first successful reload it passes
    /// text through unchanged.
    pub fn new(kind: EngineKind) -> Self {
        Self {
            kind,
            current: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Creates a handle and loads `words` into it.
    pub fn with_words<I, S>(kind: EngineKind, words: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let handle = Self::new(kind);
        handle.reload(words)?;
        Ok(handle)
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    /// Rebuilds the engine from `words` and swaps it in.
    ///
    /// On error the previous engine stays active.
    pub fn reload<I, S>(&self, words: I) -> Result<(), FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reload_patterns(&PatternSet::from_words(words))
    }

    /// Like [`reload`](Self::reload) with explicit replacements.
    pub fn reload_patterns(&self, patterns: &PatternSet) -> Result<(), FilterError> {
        let engine = match Engine::build(self.kind, patterns) {
            Ok(engine) => Arc::new(engine),
            Err(e) => {
                warn!("Rejected {} reload, keeping previous engine: {}", self.kind, e);
                return Err(e);
            }
        };

        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(engine);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        drop(slot);

        info!(
            "Reloaded {} engine with {} patterns (generation {}).",
            self.kind,
            patterns.len(),
            generation
        );
        Ok(())
    }

    /// Drops the active engine; text passes through unchanged afterwards.
    pub fn clear(&self) {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            self.generation.fetch_add(1, Ordering::SeqCst);
            info!("Cleared {} engine.", self.kind);
        }
    }

    /// Returns `text` with blacklisted words masked.
    pub fn sanitize(&self, text: &str) -> String {
        match self.snapshot() {
            Some(engine) => engine.replace(text),
            None => {
                debug!("No engine loaded, passing text through.");
                text.to_string()
            }
        }
    }

    /// The engine active right now, if any.
    pub fn snapshot(&self) -> Option<Arc<Engine>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Patterns in the active engine, zero when none is loaded.
    pub fn pattern_count(&self) -> usize {
        self.snapshot().map_or(0, |e| e.pattern_count())
    }

    /// Number of engine swaps (reloads and clears) so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
