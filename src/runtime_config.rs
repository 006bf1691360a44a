//! # Runtime Configuration Module
//!
//! Where the dispatcher finds its handlers and its route cache.
//!
//! ## Sources
//!
//! Configuration can come from a YAML/JSON file, from environment variables, or
//! be built in code. The CLI layers them: file, then environment, then flags.
//!
//! ## Environment Variables
//!
//! | Variable               | Field              | Default |
//! |------------------------|--------------------|---------|
//! | `BRRTD_NAMESPACE_ROOT` | `namespace_root`   | empty   |
//! | `BRRTD_STORE_PATH`     | `store_path`       | empty   |
//! | `BRRTD_CACHE_PATH`     | `cache_path`       | unset (caching disabled) |
//! | `BRRTD_HANDLER_EXT`    | `handler_extension`| `rs`    |
//!
//! ## Example Configuration
//!
//! ```yaml
//! namespace_root: "app::controllers::"
//! store_path: src/controllers
//! cache_path: target/routes.json
//! ```

use crate::discovery::DEFAULT_HANDLER_EXTENSION;
use crate::error::{DispatchError, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Dispatcher construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatcherConfig {
    /// Prefix joined with a handler file stem to form its type name
    pub namespace_root: String,
    /// Flat directory holding handler definition files
    pub store_path: PathBuf,
    /// Route cache file; `None` disables caching
    pub cache_path: Option<PathBuf>,
    /// Extension marking handler definition files (without the dot)
    pub handler_extension: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            namespace_root: String::new(),
            store_path: PathBuf::new(),
            cache_path: None,
            handler_extension: DEFAULT_HANDLER_EXTENSION.to_string(),
        }
    }
}

impl DispatcherConfig {
    pub fn new(namespace_root: impl Into<String>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            namespace_root: namespace_root.into(),
            store_path: store_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cache(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(cache_path.into());
        self
    }

    #[must_use]
    pub fn with_handler_extension(mut self, extension: impl Into<String>) -> Self {
        self.handler_extension = extension.into();
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay any `BRRTD_*` variables that are set onto `self`.
    pub fn apply_env(&mut self) {
        if let Ok(val) = env::var("BRRTD_NAMESPACE_ROOT") {
            self.namespace_root = val;
        }
        if let Ok(val) = env::var("BRRTD_STORE_PATH") {
            self.store_path = PathBuf::from(val);
        }
        if let Ok(val) = env::var("BRRTD_CACHE_PATH") {
            // empty means "no cache"
            self.cache_path = (!val.is_empty()).then(|| PathBuf::from(val));
        }
        if let Ok(val) = env::var("BRRTD_HANDLER_EXT") {
            let val = val.trim_start_matches('.');
            if !val.is_empty() {
                self.handler_extension = val.to_string();
            }
        }
    }

    /// Load configuration from a YAML (`.yaml`/`.yml`) or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let manifest_err = |message: String| DispatchError::Manifest {
            path: path.to_path_buf(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| manifest_err(e.to_string()))?;
        let yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if yaml {
            serde_yaml::from_str(&content).map_err(|e| manifest_err(e.to_string()))
        } else {
            serde_json::from_str(&content).map_err(|e| manifest_err(e.to_string()))
        }
    }

    /// Cache file to reconcile against, if caching is enabled.
    ///
    /// An empty path disables caching whichever source it came from.
    #[must_use]
    pub fn active_cache_path(&self) -> Option<&Path> {
        self.cache_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Check construction preconditions.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NotConfigured`] when the store path is not a directory
    /// or the namespace root is empty.
    pub fn validate(&self) -> Result<()> {
        if self.namespace_root.is_empty() {
            return Err(DispatchError::NotConfigured {
                reason: "handler namespace root is not specified".to_string(),
            });
        }
        if !self.store_path.is_dir() {
            return Err(DispatchError::NotConfigured {
                reason: format!(
                    "handler path '{}' is not a directory",
                    self.store_path.display()
                ),
            });
        }
        Ok(())
    }
}
