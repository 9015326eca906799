// wordmask-core/src/pattern.rs
//! Normalized blacklist patterns and their mask tokens.
//!
//! A raw word list becomes a `PatternSet`: each word is folded to ASCII lower
//! case and paired with a run of stars as long as the word in bytes, capped at
//! [`MAX_MASK_LEN`].
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;

/// Longest mask token handed out; longer words reuse it.
pub const MAX_MASK_LEN: usize = 15;

/// Star tokens indexed by length. Index 0 is the empty token.
static MASKS: Lazy<[String; MAX_MASK_LEN + 1]> = Lazy::new(|| {
    let mut masks: [String; MAX_MASK_LEN + 1] = Default::default();
    for i in 1..=MAX_MASK_LEN {
        masks[i] = format!("{}*", masks[i - 1]);
    }
    masks
});

/// Returns the mask token for `word`, one star per byte.
pub fn mask_for(word: &str) -> &'static str {
    let len = word.len().min(MAX_MASK_LEN);
    &MASKS[len]
}

/// A single substitution rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Lower-cased key the text is matched against.
    pub key: String,
    /// Text written in place of a match.
    pub replacement: String,
}

impl Pattern {
    pub fn new(key: &str, replacement: impl Into<String>) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            replacement: replacement.into(),
        }
    }
}

/// An ordered list of patterns. Order matters: on duplicate keys the
/// earlier pattern wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Builds the star-masked pattern set for a blacklist.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = words
            .into_iter()
            .map(|w| {
                let word = w.as_ref();
                Pattern::new(word, mask_for(word))
            })
            .collect();
        Self { patterns }
    }

    /// Builds a pattern set from explicit `(key, replacement)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let patterns = pairs
            .into_iter()
            .map(|(k, v)| Pattern::new(k.as_ref(), v))
            .collect();
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
