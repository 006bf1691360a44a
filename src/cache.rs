//! # Route Cache Module
//!
//! Persists a [`RouteTable`] as a flat JSON object so later processes can skip
//! discovery.
//!
//! ```json
//! {
//!   "GET:/api/hello": "app::controllers::Greeter::hello",
//!   "POST:/api/hello": "app::controllers::Greeter::create"
//! }
//! ```
//!
//! ## Staleness
//!
//! [`RouteCache::reconcile`] rewrites the file only when the freshly discovered
//! table contains a `Type::operation` target that the cached file does not
//! mention anywhere. Keys are not compared, so a route whose path changed but
//! whose target did not leaves the file untouched. See
//! [`RouteTable::has_unseen_targets`].
//!
//! There is no locking and no atomic rename. Two processes reconciling the same
//! file race and the last writer wins.

use crate::error::{DispatchError, Result};
use crate::table::RouteTable;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What [`RouteCache::reconcile`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// No cache existed; the full table was written.
    ColdWrite,
    /// The cache was stale (or unreadable as JSON) and was overwritten.
    Rewritten,
    /// The cache already covered every target; nothing was written.
    Unchanged,
}

/// Handle on a route cache file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCache {
    path: PathBuf,
}

impl RouteCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` when the cache path is an existing regular file.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the cached table.
    ///
    /// Returns `None` when the file is missing, unreadable, not valid JSON, or
    /// holds no routes. Callers fall back to discovery in that case. A decoded
    /// table is trusted as-is and not checked against the handler store.
    #[must_use]
    pub fn load(&self) -> Option<RouteTable> {
        if !self.exists() {
            return None;
        }
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(cache = %self.path.display(), error = %e, "route cache unreadable");
                return None;
            }
        };
        match serde_json::from_slice::<RouteTable>(&content) {
            Ok(table) if !table.is_empty() => {
                debug!(cache = %self.path.display(), routes_count = table.len(), "loaded route cache");
                Some(table)
            }
            Ok(_) => None,
            Err(e) => {
                warn!(cache = %self.path.display(), error = %e, "route cache is not a valid route map");
                None
            }
        }
    }

    /// Bring the cache file in line with `table`.
    ///
    /// # Errors
    ///
    /// [`DispatchError::CacheIo`] when the file exists but cannot be opened or
    /// read, [`DispatchError::CacheWrite`] when writing fails.
    pub fn reconcile(&self, table: &RouteTable) -> Result<CacheOutcome> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound || !self.path.exists() => {
                debug!(cache = %self.path.display(), "no route cache, writing");
                self.write(table)?;
                info!(cache = %self.path.display(), routes_count = table.len(), "route cache created");
                return Ok(CacheOutcome::ColdWrite);
            }
            Err(source) => {
                return Err(DispatchError::CacheIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|source| DispatchError::CacheIo {
                path: self.path.clone(),
                source,
            })?;
        drop(file);

        let stale = match serde_json::from_slice::<RouteTable>(&content) {
            Ok(cached) => table.has_unseen_targets(&cached),
            Err(e) => {
                warn!(cache = %self.path.display(), error = %e, "route cache undecodable, rewriting");
                true
            }
        };

        if stale {
            self.write(table)?;
            info!(cache = %self.path.display(), routes_count = table.len(), "route cache refreshed");
            Ok(CacheOutcome::Rewritten)
        } else {
            debug!(cache = %self.path.display(), "route cache up to date");
            Ok(CacheOutcome::Unchanged)
        }
    }

    /// Overwrite the cache file with `table`, keys sorted.
    pub fn write(&self, table: &RouteTable) -> Result<()> {
        let sorted: BTreeMap<String, String> = table.to_string_map().into_iter().collect();
        let data = serde_json::to_vec_pretty(&sorted).map_err(|e| DispatchError::CacheWrite {
            path: self.path.clone(),
            source: io::Error::other(e),
        })?;
        std::fs::write(&self.path, data).map_err(|source| DispatchError::CacheWrite {
            path: self.path.clone(),
            source,
        })
    }
}
