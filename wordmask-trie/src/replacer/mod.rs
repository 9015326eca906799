// wordmask-trie/src/replacer/mod.rs
//! Prioritized multi-pattern scan-and-substitute over a compressed trie.
//!
//! Keys are folded to ASCII lower case at build time and the input is scanned
//! through a lower-cased view, while unmatched spans are copied from the
//! original input. Non-ASCII bytes are never case folded.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::mapping::ByteMapping;
use crate::node::{Children, TrieNode};
use crate::Priority;

/// Reasons a [`TrieReplacer`] cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No patterns were supplied.
    EmptyPatternSet,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyPatternSet => write!(f, "cannot build a trie from an empty pattern set"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

/// The best match found at a position of the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Replacement text of the matched key.
    pub value: &'a str,
    /// Length of the matched key in bytes. Zero for the empty key.
    pub len: usize,
}

/// An immutable compiled replacer.
#[derive(Debug)]
pub struct TrieReplacer {
    root: TrieNode,
    mapping: ByteMapping,
    patterns: usize,
}

impl TrieReplacer {
    /// Compiles `(key, replacement)` pairs in order.
    ///
    /// Earlier pairs get higher priority, so when two keys are identical the
    /// first one wins.
    pub fn new<I, K, V>(pairs: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(Vec<u8>, V)> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().as_bytes().to_ascii_lowercase(), v))
            .collect();

        if pairs.is_empty() {
            return Err(BuildError::EmptyPatternSet);
        }

        let mapping = ByteMapping::from_keys(pairs.iter().map(|(k, _)| k.as_slice()));
        let mut root = TrieNode::with_table(mapping.table_size());
        let total = pairs.len();
        for (i, (key, value)) in pairs.iter().enumerate() {
            root.add(key, value.as_ref(), total - i, &mapping);
        }

        Ok(Self {
            root,
            mapping,
            patterns: total,
        })
    }

    /// Number of patterns the replacer was built from, duplicates included.
    pub fn len(&self) -> usize {
        self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Finds the highest-priority key that is a prefix of `haystack`.
    ///
    /// `haystack` must already be lower-cased. With `ignore_root` set, an
    /// empty key stored on the root is not reported.
    pub fn lookup(&self, haystack: &[u8], ignore_root: bool) -> Option<Match<'_>> {
        let mut best_priority: Priority = 0;
        let mut best = None;
        let mut node = &self.root;
        let mut rest = haystack;
        let mut depth = 0usize;

        loop {
            let skip = ignore_root && core::ptr::eq(node, &self.root);
            if node.priority > best_priority && !skip {
                best_priority = node.priority;
                best = Some(Match {
                    value: node.value.as_str(),
                    len: depth,
                });
            }

            let Some(&b) = rest.first() else {
                break;
            };

            match &node.children {
                Children::Table(table) => {
                    let Some(next) = self.mapping.index(b).and_then(|idx| table[idx].as_deref()) else {
                        break;
                    };
                    node = next;
                    rest = &rest[1..];
                    depth += 1;
                }
                Children::Prefix { prefix, next } if rest.starts_with(prefix) => {
                    depth += prefix.len();
                    rest = &rest[prefix.len()..];
                    node = &**next;
                }
                _ => break,
            }
        }

        best
    }

    /// Returns a copy of `text` with every match substituted.
    pub fn replace(&self, text: &str) -> String {
        let folded = text.as_bytes().to_ascii_lowercase();
        let mut out = String::with_capacity(text.len());
        let mut last = 0usize;
        let mut pos = 0usize;
        let mut prev_match_empty = false;

        while pos <= folded.len() {
            // An empty match at this position was already emitted.
            let found = self.lookup(&folded[pos..], prev_match_empty);
            prev_match_empty = matches!(found, Some(m) if m.len == 0);

            if let Some(m) = found {
                out.push_str(&text[last..pos]);
                out.push_str(m.value);
                pos += m.len;
                last = pos;
                continue;
            }

            match text[pos..].chars().next() {
                Some(c) => pos += c.len_utf8(),
                None => break,
            }
        }

        out.push_str(&text[last..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn stars(words: &[&str]) -> TrieReplacer {
        TrieReplacer::new(words.iter().map(|w| (*w, "*".repeat(w.len())))).unwrap()
    }

    #[test]
    fn rejects_empty_pattern_set() {
        let pairs: Vec<(&str, &str)> = Vec::new();
        assert_eq!(TrieReplacer::new(pairs).unwrap_err(), BuildError::EmptyPatternSet);
    }

    #[test]
    fn replaces_small_list() {
        let r = stars(&["fuck", "duck", "puck", "suck", "eff"]);
        assert_eq!(r.replace("foo"), "foo");
        assert_eq!(r.replace("foo fuck"), "foo ****");
        assert_eq!(r.replace("foo uck"), "foo uck");
        assert_eq!(r.replace("foo ffuck"), "foo f****");
        assert_eq!(r.replace("eff"), "***");
    }

    #[test]
    fn lookup_is_case_folded_but_output_keeps_unmatched_case() {
        let r = stars(&["duck"]);
        assert_eq!(r.replace("Big DUCK Energy"), "Big **** Energy");
    }

    #[test]
    fn replacement_text_is_not_case_folded() {
        let r = TrieReplacer::new(vec![("Cat", "DOG")]).unwrap();
        assert_eq!(r.replace("a cat"), "a DOG");
    }

    #[test]
    fn first_pattern_wins_for_identical_keys() {
        let r = TrieReplacer::new(vec![("x", "A"), ("x", "B")]).unwrap();
        assert_eq!(r.replace("x"), "A");
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn priority_not_length_decides_between_nested_keys() {
        let shorter_first = TrieReplacer::new(vec![("a", "1"), ("ab", "2")]).unwrap();
        assert_eq!(shorter_first.replace("ab"), "1b");

        let longer_first = TrieReplacer::new(vec![("ab", "2"), ("a", "1")]).unwrap();
        assert_eq!(longer_first.replace("ab"), "2");
    }

    #[test]
    fn lookup_reports_match_length() {
        let r = stars(&["bcbc", "x", "xy"]);
        assert_eq!(r.lookup(b"bcbcz", false), Some(Match { value: "****", len: 4 }));
        assert_eq!(r.lookup(b"bcb", false), None);
        assert_eq!(r.lookup(b"q", false), None);
    }

    #[test]
    fn empty_key_matches_between_characters_without_looping() {
        let r = TrieReplacer::new(vec![("", "-")]).unwrap();
        assert_eq!(r.replace(""), "-");
        assert_eq!(r.replace("ab"), "-a-b-");
    }

    #[test]
    fn empty_key_does_not_shadow_real_matches() {
        let r = TrieReplacer::new(vec![("", "|"), ("ab", "X")]).unwrap();
        assert_eq!(r.replace("abc"), "|X|c|");
    }

    #[test]
    fn ignore_root_skips_empty_key() {
        let r = TrieReplacer::new(vec![("", "|")]).unwrap();
        assert_eq!(r.lookup(b"a", false), Some(Match { value: "|", len: 0 }));
        assert_eq!(r.lookup(b"a", true), None);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let r = stars(&["duck"]);
        assert_eq!(r.replace("ñandú duck ü"), "ñandú **** ü");

        let empty = TrieReplacer::new(vec![("", ".")]).unwrap();
        assert_eq!(empty.replace("é"), ".é.");
    }

    #[test]
    fn non_ascii_keys_match_exactly() {
        let r = TrieReplacer::new(vec![("Ärger", "#")]).unwrap();
        assert_eq!(r.replace("kein Ärger hier"), "kein # hier");
        assert_eq!(r.replace("kein ärger hier"), "kein ärger hier");
    }

    #[test]
    fn overlapping_alphabet_list() {
        let r = stars(&["@", "@a", "@ab", "a", "ab", "abc", "b", "bc", "bcd", "c", "cd", "cde"]);
        assert_eq!(r.replace("EFG"), "EFG");
        // Earlier single-byte keys outrank the longer keys inserted after them.
        assert_eq!(r.replace("abcd"), "***d");
    }
}
