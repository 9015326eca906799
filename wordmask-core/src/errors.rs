//! errors.rs - Custom error types for the wordmask-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;
use wordmask_trie::BuildError;

use crate::wordlist::StoreError;

/// This enum represents all possible error types in the `wordmask-core` library.
///
/// None of these are fatal: a failed reload leaves the previously active
/// engine in place.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("Cannot build a replacer from an empty blacklist")]
    EmptyPatternSet,

    #[error("Failed to build replacer: {0}")]
    Build(String),

    #[error("Word list storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<BuildError> for FilterError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::EmptyPatternSet => FilterError::EmptyPatternSet,
        }
    }
}
