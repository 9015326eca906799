// wordmask-core/src/lib.rs
//! # wordmask Core Library
//!
//! `wordmask-core` masks blacklisted words in text. A word list is turned into
//! a [`PatternSet`], compiled into an immutable [`Engine`], and served through
//! a [`FilterHandle`] that can be reloaded while other threads keep
//! sanitizing against the engine they already hold.
//!
//! ## Modules
//!
//! * `pattern`: Normalized `(key, mask)` patterns and the star mask table.
//! * `engine`: The `Replacer` trait, `EngineKind` and the `Engine` variant type.
//! * `engines`: The trie (substring) and word-boundary (whole token) engines.
//! * `filter`: `FilterHandle`, the hot-reloadable engine holder.
//! * `wordlist`: The `WordListStore` trait with in-memory and file backends.
//! * `word_filter`: A namespace's store bound to its handle.
//! * `registry`: Owned map from namespace to `WordFilter`.
//! * `config`: YAML configuration.
//! * `headless`: One-shot sanitization.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordmask_core::{EngineKind, FilterHandle};
//!
//! let handle = FilterHandle::new(EngineKind::Trie);
//! assert_eq!(handle.sanitize("foo fuck"), "foo fuck");
//!
//! handle.reload(["fuck", "duck", "eff"]).unwrap();
//! assert_eq!(handle.sanitize("foo fuck"), "foo ****");
//! assert_eq!(handle.sanitize("foo ffuck"), "foo f****");
//!
//! let words = FilterHandle::with_words(EngineKind::WordBoundary, ["fuck"]).unwrap();
//! assert_eq!(words.sanitize("foo ffuck"), "foo ffuck");
//! ```
//!
//! ## Error Handling
//!
//! Fallible core operations return [`FilterError`]; store backends report
//! [`StoreError`]. Configuration loading uses `anyhow::Error`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter;
pub mod headless;
pub mod pattern;
pub mod registry;
pub mod word_filter;
pub mod wordlist;

/// Re-exports the configuration types.
pub use config::{config_candidate_paths, FilterConfig, DEFAULT_NAMESPACE};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

/// Re-exports the engine contract and its implementations.
pub use engine::{Engine, EngineKind, Replacer};
pub use engines::trie_engine::TrieEngine;
pub use engines::word_boundary_engine::WordBoundaryEngine;

pub use filter::FilterHandle;
pub use pattern::{mask_for, Pattern, PatternSet, MAX_MASK_LEN};
pub use registry::FilterRegistry;
pub use word_filter::WordFilter;
pub use wordlist::{read_word_file, FileWordList, MemoryWordList, StoreError, WordListStore};

/// Re-exports the one-shot helper for non-interactive use.
pub use headless::headless_sanitize_string;
