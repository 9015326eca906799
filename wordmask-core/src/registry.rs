// wordmask-core/src/registry.rs
//! Owned registry of per-namespace word filters.
//!
//! A `FilterRegistry` is built once and shared by reference. Filters are
//! created lazily on first use and warmed from the shared store. All filters
//! share the registry's engine kind.

use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::engine::EngineKind;
use crate::errors::FilterError;
use crate::word_filter::WordFilter;
use crate::wordlist::WordListStore;

pub struct FilterRegistry {
    store: Arc<dyn WordListStore>,
    kind: EngineKind,
    filters: RwLock<HashMap<String, Arc<WordFilter>>>,
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("kind", &self.kind)
            .field("namespaces", &self.namespaces())
            .finish_non_exhaustive()
    }
}

impl FilterRegistry {
    pub fn new(store: Arc<dyn WordListStore>, kind: EngineKind) -> Self {
        Self {
            store,
            kind,
            filters: RwLock::new(HashMap::new()),
        }
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    pub fn store(&self) -> &Arc<dyn WordListStore> {
        &self.store
    }

    /// Returns the filter for `namespace`, creating and loading it if needed.
    pub fn get(&self, namespace: &str) -> Result<Arc<WordFilter>, FilterError> {
        if let Some(filter) = self
            .filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(namespace)
        {
            return Ok(Arc::clone(filter));
        }

        // Warm up outside the lock; the store may be slow.
        let fresh = Arc::new(WordFilter::open(namespace, Arc::clone(&self.store), self.kind)?);

        let mut filters = self.filters.write().unwrap_or_else(PoisonError::into_inner);
        let filter = filters
            .entry(namespace.to_string())
            .or_insert_with(|| {
                debug!("Registered filter for namespace '{}'.", namespace);
                fresh
            });
        Ok(Arc::clone(filter))
    }

    /// Sanitizes `text` with the filter for `namespace`.
    pub fn sanitize(&self, namespace: &str, text: &str) -> Result<String, FilterError> {
        Ok(self.get(namespace)?.sanitize(text))
    }

    /// Namespaces with a live filter, sorted.
    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .filters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}
