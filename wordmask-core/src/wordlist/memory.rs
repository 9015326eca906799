// wordmask-core/src/wordlist/memory.rs
//! In-process `WordListStore`. Contents are lost when the process exits.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock};

use super::{validate_words, StoreError, WordListStore};

#[derive(Debug, Default)]
pub struct MemoryWordList {
    lists: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl MemoryWordList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordListStore for MemoryWordList {
    fn count(&self, namespace: &str) -> Result<usize, StoreError> {
        let lists = self.lists.read().unwrap_or_else(PoisonError::into_inner);
        Ok(lists.get(namespace).map_or(0, BTreeSet::len))
    }

    fn get(&self, namespace: &str, count: usize, offset: usize) -> Result<Vec<String>, StoreError> {
        let lists = self.lists.read().unwrap_or_else(PoisonError::into_inner);
        Ok(lists
            .get(namespace)
            .map(|set| set.iter().skip(offset).take(count).cloned().collect())
            .unwrap_or_default())
    }

    fn set(&self, namespace: &str, words: &[String]) -> Result<(), StoreError> {
        validate_words(words)?;
        let mut lists = self.lists.write().unwrap_or_else(PoisonError::into_inner);
        lists
            .entry(namespace.to_string())
            .or_default()
            .extend(words.iter().cloned());
        Ok(())
    }

    fn delete(&self, namespace: &str, words: &[String]) -> Result<(), StoreError> {
        let mut lists = self.lists.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = lists.get_mut(namespace) {
            for w in words {
                set.remove(w);
            }
        }
        Ok(())
    }

    fn replace(&self, namespace: &str, words: &[String]) -> Result<(), StoreError> {
        validate_words(words)?;
        let mut lists = self.lists.write().unwrap_or_else(PoisonError::into_inner);
        lists.insert(namespace.to_string(), words.iter().cloned().collect());
        Ok(())
    }

    fn empty(&self, namespace: &str) -> Result<(), StoreError> {
        let mut lists = self.lists.write().unwrap_or_else(PoisonError::into_inner);
        lists.remove(namespace);
        Ok(())
    }
}
