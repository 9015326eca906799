// wordmask-core/src/headless.rs
// File: wordmask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot sanitization without a store or handle.

use crate::engine::{Engine, EngineKind, Replacer};
use crate::errors::FilterError;
use crate::pattern::PatternSet;

/// Masks `content` against `words` with a freshly compiled engine.
///
/// # Arguments
///
/// * `words` - The blacklist.
/// * `content` - The string to be sanitized.
/// * `engine_type` - Which engine to use (`Trie` or `WordBoundary`).
pub fn headless_sanitize_string<I, S>(
    words: I,
    content: &str,
    engine_type: EngineKind,
) -> Result<String, FilterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let engine = Engine::build(engine_type, &PatternSet::from_words(words))?;
    Ok(engine.replace(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_sanitize_string_trie() -> Result<(), FilterError> {
        let out = headless_sanitize_string(["fuck"], "foo ffuck", EngineKind::Trie)?;
        assert_eq!(out, "foo f****");
        Ok(())
    }

    #[test]
    fn test_headless_sanitize_string_word_boundary() -> Result<(), FilterError> {
        let out = headless_sanitize_string(["fuck"], "foo ffuck fuck", EngineKind::WordBoundary)?;
        assert_eq!(out, "foo ffuck ****");
        Ok(())
    }

    #[test]
    fn test_headless_sanitize_string_empty_list() {
        let none: [&str; 0] = [];
        let result = headless_sanitize_string(none, "text", EngineKind::Trie);
        assert!(matches!(result, Err(FilterError::EmptyPatternSet)));
    }
}
