// wordmask/src/commands/mod.rs
//! Command handlers and the setup they share.

pub mod sanitize;
pub mod words;

use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;
use wordmask_core::{
    read_word_file, FileWordList, FilterConfig, FilterRegistry, MemoryWordList, WordFilter,
    WordListStore,
};

use crate::cli::FilterArgs;

/// Loads the configuration file (if any) and applies command-line overrides.
pub fn resolve_config(args: &FilterArgs) -> Result<FilterConfig> {
    let mut config = FilterConfig::load_or_default(args.config.as_deref())?;
    if let Some(engine) = args.engine {
        config.engine = engine.into();
    }
    if let Some(dir) = &args.store_dir {
        config.store_dir = Some(dir.clone());
    }
    if let Some(lang) = &args.lang {
        config.default_namespace = lang.clone();
    }
    if let Some(wordlist) = &args.wordlist {
        config.wordlist = Some(wordlist.clone());
    }
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Builds the registry over the configured store.
pub fn build_registry(config: &FilterConfig) -> Result<FilterRegistry> {
    let store: Arc<dyn WordListStore> = match &config.store_dir {
        Some(dir) => Arc::new(
            FileWordList::open(dir)
                .with_context(|| format!("Failed to open word list store at {}", dir.display()))?,
        ),
        None => Arc::new(MemoryWordList::new()),
    };
    Ok(FilterRegistry::new(store, config.engine))
}

/// Returns the filter of the configured namespace, seeded from the
/// configured word list file when one is set.
pub fn open_filter(registry: &FilterRegistry, config: &FilterConfig) -> Result<Arc<WordFilter>> {
    let namespace = &config.default_namespace;
    let filter = registry
        .get(namespace)
        .with_context(|| format!("Failed to load word list for namespace '{}'", namespace))?;

    if let Some(path) = &config.wordlist {
        let words = read_word_file(path)?;
        filter
            .replace(&words)
            .with_context(|| format!("Failed to load {} into namespace '{}'", path.display(), namespace))?;
        info!("Seeded namespace '{}' with {} words.", namespace, words.len());
    }
    Ok(filter)
}
