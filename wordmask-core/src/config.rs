//! Configuration management for `wordmask-core`.
//!
//! This module defines the filter configuration: which engine to run, the
//! default namespace, an optional seed word list and an optional directory
//! for the file-backed store. Configurations are YAML files; missing fields
//! fall back to defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::EngineKind;

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "en_US";

/// Top-level configuration for a wordmask filter service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Substitution strategy for every namespace.
    pub engine: EngineKind,
    /// Namespace used when a caller does not name one.
    pub default_namespace: String,
    /// Newline-separated seed list that replaces the default namespace.
    pub wordlist: Option<PathBuf>,
    /// Directory for the file-backed store. In-memory when unset.
    pub store_dir: Option<PathBuf>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            wordlist: None,
            store_dir: None,
        }
    }
}

impl FilterConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise the first existing candidate
    /// path, otherwise the defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match config_candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("No configuration file found, using defaults.");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.default_namespace.trim().is_empty() {
            return Err(anyhow!("`default_namespace` must not be empty."));
        }
        Ok(())
    }
}

/// Places searched for a configuration file, in order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    vec![
        dirs::config_dir().map(|p| p.join("wordmask").join("config.yaml")),
        dirs::home_dir().map(|p| p.join(".wordmask").join("config.yaml")),
        Some(PathBuf::from("./wordmask.yaml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}
