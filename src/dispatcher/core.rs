use crate::cache::{CacheOutcome, RouteCache};
use crate::discovery::{scan, SkippedHandler};
use crate::error::{DispatchError, Result};
use crate::registry::HandlerResolver;
use crate::route::{route_key, HandlerReference};
use crate::runtime_config::DispatcherConfig;
use crate::table::RouteTable;
use tracing::{debug, info};

/// Resolves `(method, path)` pairs to handler operations.
///
/// Generic over the [`HandlerResolver`] so callers can plug in an explicit
/// [`HandlerRegistry`](crate::registry::HandlerRegistry), a manifest-backed one,
/// or their own lookup.
pub struct Dispatcher<R> {
    config: DispatcherConfig,
    resolver: R,
    routes: RouteTable,
    skipped: Vec<SkippedHandler>,
    cache: Option<RouteCache>,
    cache_outcome: Option<CacheOutcome>,
    discovery_count: usize,
}

impl<R: HandlerResolver> Dispatcher<R> {
    /// Validate `config`, discover routes and reconcile the cache.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::NotConfigured`] for an empty namespace root or a store
    ///   path that is not a directory
    /// - [`DispatchError::EmptyStore`] when the store cannot be listed
    /// - [`DispatchError::CacheIo`] / [`DispatchError::CacheWrite`] when the cache
    ///   cannot be reconciled
    pub fn new(config: DispatcherConfig, resolver: R) -> Result<Self> {
        config.validate()?;

        let cache = config.active_cache_path().map(RouteCache::new);
        let mut dispatcher = Self {
            config,
            resolver,
            routes: RouteTable::new(),
            skipped: Vec::new(),
            cache,
            cache_outcome: None,
            discovery_count: 0,
        };

        dispatcher.discover()?;
        dispatcher.cache_outcome = dispatcher.reconcile_cache()?;

        info!(
            namespace_root = %dispatcher.config.namespace_root,
            routes_count = dispatcher.routes.len(),
            skipped = dispatcher.skipped.len(),
            cache_outcome = ?dispatcher.cache_outcome,
            "Dispatcher ready"
        );
        Ok(dispatcher)
    }

    /// Build the live route table from the handler store.
    ///
    /// Scans at most once per dispatcher: while the live table holds any route
    /// the call returns it without touching the filesystem.
    pub fn discover(&mut self) -> Result<&RouteTable> {
        if !self.routes.is_empty() {
            return Ok(&self.routes);
        }

        let discovery = scan(
            &self.config.store_path,
            &self.config.namespace_root,
            &self.config.handler_extension,
            &self.resolver,
        )?;
        self.discovery_count += 1;
        self.routes = discovery.table;
        self.skipped = discovery.skipped;
        Ok(&self.routes)
    }

    /// Reconcile the configured cache file with the live table.
    ///
    /// Returns `None` when caching is disabled.
    pub fn reconcile_cache(&self) -> Result<Option<CacheOutcome>> {
        match &self.cache {
            Some(cache) => cache.reconcile(&self.routes).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve a request to its handler operation.
    ///
    /// Reads the table from the cache file when that file exists and decodes,
    /// otherwise uses (and if needed rebuilds) the live table.
    ///
    /// # Errors
    ///
    /// [`DispatchError::RouteNotFound`] when no route matches; discovery errors
    /// when the live table has to be rebuilt and the store cannot be listed.
    pub fn resolve(&mut self, method: &str, path: &str) -> Result<HandlerReference> {
        let key = route_key(method, path);
        let cached = self.cache.as_ref().and_then(RouteCache::load);
        let source = if cached.is_some() { "cache" } else { "discovery" };

        let routes = match &cached {
            Some(table) => table,
            None => self.discover()?,
        };

        match routes.get(&key) {
            Some(target) => {
                debug!(route = %key, target = %target, source, "route resolved");
                Ok(target.to_reference())
            }
            None => {
                debug!(route = %key, source, "route not found");
                Err(DispatchError::route_not_found(&key))
            }
        }
    }

    /// Live route table built by discovery.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Handler files skipped by the last discovery pass.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedHandler] {
        &self.skipped
    }

    /// Number of discovery passes that actually scanned the store.
    #[must_use]
    pub fn discovery_count(&self) -> usize {
        self.discovery_count
    }

    /// What reconciliation did to the cache during construction.
    #[must_use]
    pub fn cache_outcome(&self) -> Option<CacheOutcome> {
        self.cache_outcome
    }

    #[must_use]
    pub fn cache(&self) -> Option<&RouteCache> {
        self.cache.as_ref()
    }
}

impl<R> std::fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("routes_count", &self.routes.len())
            .field("skipped", &self.skipped.len())
            .field("discovery_count", &self.discovery_count)
            .finish_non_exhaustive()
    }
}
