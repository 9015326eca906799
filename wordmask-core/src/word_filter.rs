// wordmask-core/src/word_filter.rs
//! One namespace's word list bound to its filter handle.
//!
//! Every mutation goes to the store first and is followed by a reload from a
//! full dump of the namespace, so the active engine always reflects what the
//! store holds after the last successful mutation.

use log::{debug, info};
use std::sync::{Arc, Mutex, PoisonError};

use crate::engine::EngineKind;
use crate::errors::FilterError;
use crate::filter::FilterHandle;
use crate::wordlist::WordListStore;

pub struct WordFilter {
    namespace: String,
    store: Arc<dyn WordListStore>,
    handle: FilterHandle,
    // Held across store mutation + reload so dumps are installed in order.
    // Never taken by `sanitize`.
    mutation: Mutex<()>,
}

impl std::fmt::Debug for WordFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordFilter")
            .field("namespace", &self.namespace)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl WordFilter {
    /// Creates a filter without touching the store. It passes text through
    /// until [`refresh`](Self::refresh) or a mutation loads words.
    pub fn new(namespace: impl Into<String>, store: Arc<dyn WordListStore>, kind: EngineKind) -> Self {
        Self {
            namespace: namespace.into(),
            store,
            handle: FilterHandle::new(kind),
            mutation: Mutex::new(()),
        }
    }

    /// Creates a filter and loads whatever the store already holds.
    pub fn open(namespace: impl Into<String>, store: Arc<dyn WordListStore>, kind: EngineKind) -> Result<Self, FilterError> {
        let filter = Self::new(namespace, store, kind);
        filter.refresh()?;
        Ok(filter)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn handle(&self) -> &FilterHandle {
        &self.handle
    }

    /// Total number of words stored for this namespace.
    pub fn count(&self) -> Result<usize, FilterError> {
        Ok(self.store.count(&self.namespace)?)
    }

    /// A page of stored words, straight from the store.
    pub fn get(&self, count: usize, offset: usize) -> Result<Vec<String>, FilterError> {
        Ok(self.store.get(&self.namespace, count, offset)?)
    }

    /// Adds words and reloads.
    pub fn set(&self, words: &[String]) -> Result<(), FilterError> {
        self.mutate("set", words.len(), |store, ns| store.set(ns, words))
    }

    /// Removes words and reloads.
    pub fn delete(&self, words: &[String]) -> Result<(), FilterError> {
        self.mutate("delete", words.len(), |store, ns| store.delete(ns, words))
    }

    /// Replaces the list and reloads.
    pub fn replace(&self, words: &[String]) -> Result<(), FilterError> {
        self.mutate("replace", words.len(), |store, ns| store.replace(ns, words))
    }

    /// Empties the list; the filter passes text through afterwards.
    pub fn empty(&self) -> Result<(), FilterError> {
        self.mutate("empty", 0, |store, ns| store.empty(ns))
    }

    /// Reloads the engine from the current store contents.
    pub fn refresh(&self) -> Result<(), FilterError> {
        let _guard = self.mutation.lock().unwrap_or_else(PoisonError::into_inner);
        self.reload_from_store()
    }

    pub fn sanitize(&self, text: &str) -> String {
        self.handle.sanitize(text)
    }

    fn mutate<F>(&self, op: &str, words: usize, f: F) -> Result<(), FilterError>
    where
        F: FnOnce(&dyn WordListStore, &str) -> Result<(), crate::wordlist::StoreError>,
    {
        let _guard = self.mutation.lock().unwrap_or_else(PoisonError::into_inner);
        f(self.store.as_ref(), &self.namespace)?;
        info!("Applied {} of {} words to namespace '{}'.", op, words, self.namespace);
        self.reload_from_store()
    }

    fn reload_from_store(&self) -> Result<(), FilterError> {
        let words = self.store.dump(&self.namespace)?;
        if words.is_empty() {
            // An empty list means nothing to mask, not a failed build.
            debug!("Namespace '{}' is empty, clearing engine.", self.namespace);
            self.handle.clear();
            return Ok(());
        }
        self.handle.reload(&words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::{FileWordList, MemoryWordList, StoreError};
    use tempfile::tempdir;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_mutations_reload_engine() {
        let store: Arc<dyn WordListStore> = Arc::new(MemoryWordList::new());
        let filter = WordFilter::new("en_US", store, EngineKind::Trie);

        filter.set(&words(&["xxxx"])).unwrap();
        assert_eq!(filter.sanitize("foo xxxx"), "foo ****");
        assert_eq!(filter.sanitize("foo fxxxx"), "foo f****");

        filter.set(&words(&["foo"])).unwrap();
        assert_eq!(filter.sanitize("foo xxxx"), "*** ****");

        filter.delete(&words(&["xxxx"])).unwrap();
        assert_eq!(filter.sanitize("foo xxxx"), "*** xxxx");

        filter.replace(&words(&["xxxx"])).unwrap();
        assert_eq!(filter.sanitize("foo xxxx"), "foo ****");
    }

    #[test]
    fn test_empty_and_delete_all_clear_engine() {
        let store: Arc<dyn WordListStore> = Arc::new(MemoryWordList::new());
        let filter = WordFilter::new("en_US", store, EngineKind::Trie);

        filter.replace(&words(&["eff"])).unwrap();
        filter.delete(&words(&["eff"])).unwrap();
        assert_eq!(filter.sanitize("eff"), "eff");

        filter.set(&words(&["eff"])).unwrap();
        filter.empty().unwrap();
        assert_eq!(filter.count().unwrap(), 0);
        assert!(!filter.handle().is_loaded());
    }

    #[test]
    fn test_rejected_mutation_keeps_engine() {
        let dir = tempdir().unwrap();
        let store: Arc<dyn WordListStore> = Arc::new(FileWordList::open(dir.path()).unwrap());
        let filter = WordFilter::new("en_US", store, EngineKind::Trie);
        filter.set(&words(&["eff"])).unwrap();
        let generation = filter.handle().generation();

        let result = filter.set(&words(&["a\nb"]));
        assert!(matches!(
            result,
            Err(FilterError::Storage(StoreError::InvalidWord(_)))
        ));
        assert_eq!(filter.sanitize("eff"), "***");
        assert_eq!(filter.handle().generation(), generation);
        assert_eq!(filter.get(10, 0).unwrap(), vec!["eff"]);
    }

    #[test]
    fn test_open_loads_existing_words() {
        let store: Arc<dyn WordListStore> = Arc::new(MemoryWordList::new());
        store.set("de_DE", &words(&["mist"])).unwrap();

        let filter = WordFilter::open("de_DE", store, EngineKind::WordBoundary).unwrap();
        assert_eq!(filter.sanitize("so ein mist"), "so ein ****");
        assert_eq!(filter.get(10, 0).unwrap(), vec!["mist"]);
    }
}
