//! # Dispatcher Module
//!
//! The dispatcher maps an incoming HTTP method and path to the handler
//! operation that serves it.
//!
//! ## Lifecycle
//!
//! Construction is the only state transition. [`Dispatcher::new`]:
//!
//! 1. validates the [`DispatcherConfig`](crate::runtime_config::DispatcherConfig)
//!    (namespace root set, store path is a directory)
//! 2. runs discovery over the handler directory
//! 3. reconciles the route cache, when one is configured
//!
//! Any failure aborts construction; there is no half-built dispatcher.
//!
//! ## Lookup
//!
//! ```rust,no_run
//! use brrtdispatch::dispatcher::Dispatcher;
//! use brrtdispatch::registry::{HandlerDefinition, HandlerRegistry};
//! use brrtdispatch::route::RouteBinding;
//! use brrtdispatch::runtime_config::DispatcherConfig;
//!
//! # fn main() -> Result<(), brrtdispatch::DispatchError> {
//! let mut registry = HandlerRegistry::new();
//! registry.register(
//!     HandlerDefinition::new("app::controllers::Greeter")
//!         .operation("hello", [RouteBinding::get("/hello")]),
//! );
//!
//! let config = DispatcherConfig::new("app::controllers::", "src/controllers")
//!     .with_cache("target/routes.json");
//! let mut dispatcher = Dispatcher::new(config, registry)?;
//!
//! let handler = dispatcher.resolve("GET", "/hello")?;
//! assert_eq!(handler.as_pair(), ("app::controllers::Greeter", "hello"));
//! # Ok(())
//! # }
//! ```
//!
//! When the cache file exists, each lookup reads its table from the file;
//! otherwise the table built during construction is used. A miss yields
//! [`DispatchError::RouteNotFound`](crate::error::DispatchError::RouteNotFound).
//!
//! ## Ownership
//!
//! The route table is a field of the dispatcher. Two dispatchers in one process
//! share nothing unless they point at the same cache file, and even then
//! writes are unsynchronised.

mod core;

pub use self::core::Dispatcher;
