// wordmask-core/src/engines/word_boundary_engine.rs
//! A `Replacer` implementation that only masks whole tokens.
//!
//! Text is split on `"\n"`, `" "` and `"\r\n"`. A token is masked when its
//! lower-cased form is in the blacklist; delimiters are copied through
//! unchanged. A lone `"\r"` belongs to the surrounding token.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;
use std::collections::HashMap;
use log::debug;

use crate::engine::Replacer;
use crate::errors::FilterError;
use crate::pattern::PatternSet;

#[derive(Debug)]
pub struct WordBoundaryEngine {
    words: HashMap<String, String>,
    patterns: usize,
}

impl WordBoundaryEngine {
    pub fn build(patterns: &PatternSet) -> Result<Self, FilterError> {
        if patterns.is_empty() {
            return Err(FilterError::EmptyPatternSet);
        }

        let mut words = HashMap::with_capacity(patterns.len());
        for p in patterns {
            words
                .entry(p.key.to_ascii_lowercase())
                .or_insert_with(|| p.replacement.clone());
        }
        debug!(
            "Compiled word-boundary engine: {} patterns, {} distinct words.",
            patterns.len(),
            words.len()
        );

        Ok(Self {
            words,
            patterns: patterns.len(),
        })
    }

    fn mask_token<'a>(&'a self, token: &'a str) -> &'a str {
        let folded = if token.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(token.to_ascii_lowercase())
        } else {
            Cow::Borrowed(token)
        };
        match self.words.get(folded.as_ref()) {
            Some(mask) => mask.as_str(),
            None => token,
        }
    }
}

/// Length of the delimiter starting at `bytes[i]`, if any.
fn delimiter_len(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes[i] {
        b'\n' | b' ' => Some(1),
        b'\r' if bytes.get(i + 1) == Some(&b'\n') => Some(2),
        _ => None,
    }
}

impl Replacer for WordBoundaryEngine {
    fn replace(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut start = 0usize;
        let mut i = 0usize;

        while i < bytes.len() {
            let Some(sep) = delimiter_len(bytes, i) else {
                i += 1;
                continue;
            };
            out.push_str(self.mask_token(&text[start..i]));
            out.push_str(&text[i..i + sep]);
            i += sep;
            start = i;
        }
        out.push_str(self.mask_token(&text[start..]));
        out
    }

    fn pattern_count(&self) -> usize {
        self.patterns
    }
}
