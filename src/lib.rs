//! # brrtdispatch
//!
//! **brrtdispatch** maps an incoming HTTP method and path to the handler operation that
//! serves it. Routes are discovered from a directory of handler definition files, kept in
//! an in-memory table, and persisted to a JSON cache so later processes can skip discovery.
//!
//! ## Architecture
//!
//! - **[`route`]** - canonical route keys, route bindings and handler references
//! - **[`registry`]** - explicit handler registration and YAML/JSON handler manifests
//! - **[`discovery`]** - scans the handler directory and builds the route table
//! - **[`table`]** - the route table itself
//! - **[`cache`]** - on-disk route cache with value-level staleness detection
//! - **[`dispatcher`]** - construction, cache reconciliation and lookup
//! - **[`runtime_config`]** - dispatcher configuration from code, files or environment
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - the `brrtdispatch` command-line tool
//!
//! ### Construction Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Dispatcher
//!     participant Discovery as discovery::scan
//!     participant Registry as HandlerResolver
//!     participant Cache as RouteCache
//!
//!     App->>Dispatcher: Dispatcher::new(config, registry)
//!     Dispatcher->>Dispatcher: validate config
//!     alt store missing or namespace empty
//!         Dispatcher-->>App: NotConfigured
//!     end
//!     Dispatcher->>Discovery: scan(store, namespace_root)
//!     loop each handler file
//!         Discovery->>Registry: resolve(namespace_root + stem)
//!         Registry-->>Discovery: HandlerDefinition / None
//!     end
//!     Discovery-->>Dispatcher: RouteTable + skipped handlers
//!     Dispatcher->>Cache: reconcile(table)
//!     Cache-->>Dispatcher: ColdWrite / Rewritten / Unchanged
//!     Dispatcher-->>App: ready
//! ```
//!
//! ### Lookup Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Dispatcher
//!     participant Cache as RouteCache
//!
//!     App->>Dispatcher: resolve("GET", "/hello")
//!     Dispatcher->>Dispatcher: route_key → "GET:/api/hello"
//!     alt cache file exists
//!         Dispatcher->>Cache: load()
//!         Cache-->>Dispatcher: RouteTable
//!     else
//!         Dispatcher->>Dispatcher: live table
//!     end
//!     alt key present
//!         Dispatcher-->>App: HandlerReference
//!     else
//!         Dispatcher-->>App: RouteNotFound "[GET] /api/hello"
//!     end
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use brrtdispatch::{Dispatcher, DispatcherConfig, HandlerDefinition, HandlerRegistry, RouteBinding};
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register(
//!     HandlerDefinition::new("app::controllers::Greeter")
//!         .operation("hello", [RouteBinding::get("/hello")]),
//! );
//!
//! // src/controllers/Greeter.rs must exist for the handler to be discovered
//! let config = DispatcherConfig::new("app::controllers::", "src/controllers")
//!     .with_cache("target/routes.json");
//! let mut dispatcher = Dispatcher::new(config, registry).expect("dispatcher");
//!
//! let handler = dispatcher.resolve("GET", "/hello").expect("route");
//! assert_eq!(handler.operation, "hello");
//! ```
//!
//! ## Matching Rules
//!
//! Matching is by exact canonical key. There is no path-parameter extraction, no method
//! case folding and no trailing-slash normalisation. See [`route::route_key`].

pub mod cache;
pub mod cli;
pub mod discovery;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod registry;
pub mod route;
pub mod runtime_config;
pub mod table;

pub use cache::{CacheOutcome, RouteCache};
pub use discovery::{scan, Discovery, SkipReason, SkippedHandler};
pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use registry::{HandlerDefinition, HandlerRegistry, HandlerResolver};
pub use route::{route_key, HandlerReference, RouteBinding, RouteTarget};
pub use runtime_config::DispatcherConfig;
pub use table::RouteTable;
