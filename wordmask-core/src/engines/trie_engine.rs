// wordmask-core/src/engines/trie_engine.rs
//! A `Replacer` implementation backed by the compressed trie in `wordmask-trie`.
//!
//! Matches are substrings: a blacklisted word is masked wherever it occurs,
//! including inside longer words.
//! License: MIT OR APACHE 2.0

use log::debug;
use wordmask_trie::TrieReplacer;

use crate::engine::Replacer;
use crate::errors::FilterError;
use crate::pattern::PatternSet;

#[derive(Debug)]
pub struct TrieEngine {
    trie: TrieReplacer,
}

impl TrieEngine {
    pub fn build(patterns: &PatternSet) -> Result<Self, FilterError> {
        let trie = TrieReplacer::new(
            patterns
                .iter()
                .map(|p| (p.key.as_str(), p.replacement.as_str())),
        )?;
        debug!("Compiled trie engine from {} patterns.", trie.len());
        Ok(Self { trie })
    }
}

impl Replacer for TrieEngine {
    fn replace(&self, text: &str) -> String {
        self.trie.replace(text)
    }

    fn pattern_count(&self) -> usize {
        self.trie.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(words: &[&str]) -> TrieEngine {
        TrieEngine::build(&PatternSet::from_words(words)).unwrap()
    }

    #[test]
    fn test_small_list_scenarios() {
        let e = engine(&["fuck", "duck", "puck", "suck", "eff"]);
        assert_eq!(e.replace("foo"), "foo");
        assert_eq!(e.replace("foo fuck"), "foo ****");
        assert_eq!(e.replace("eff"), "***");
        assert_eq!(e.replace("foo uck"), "foo uck");
        assert_eq!(e.replace("foo ffuck"), "foo f****");
        assert_eq!(e.pattern_count(), 5);
    }

    #[test]
    fn test_case_insensitive() {
        let e = engine(&["fuck"]);
        assert_eq!(e.replace("FUCK"), e.replace("fuck"));
        assert_eq!(e.replace("What the FuCk"), "What the ****");
    }

    #[test]
    fn test_mask_capped_at_fifteen() {
        let word = "supercalifragilistic";
        let e = engine(&[word]);
        assert_eq!(e.replace(word), "*".repeat(15));
    }

    #[test]
    fn test_duplicate_keys_resolve_to_first() {
        let e = TrieEngine::build(&PatternSet::from_pairs([("x", "A"), ("x", "B")])).unwrap();
        assert_eq!(e.replace("x"), "A");
    }
}
