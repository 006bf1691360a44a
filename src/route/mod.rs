//! # Route Module
//!
//! Plain data shared by discovery, the cache and the dispatcher:
//!
//! - [`route_key`] turns a method and path into the canonical lookup key
//! - [`RouteBinding`] is the `{method, path}` pair a handler author attaches to an operation
//! - [`RouteTarget`] is the `Type::operation` value stored in the route table and cache
//! - [`HandlerReference`] is what a successful lookup hands back to the caller
//!
//! ## Canonical keys
//!
//! Every key has the shape `METHOD:/api/...`. Paths that already mention `/api`
//! are used as-is, anything else gets the `/api` prefix:
//!
//! ```rust
//! use brrtdispatch::route::route_key;
//!
//! assert_eq!(route_key("GET", "/hello"), "GET:/api/hello");
//! assert_eq!(route_key("GET", "/api/hello"), "GET:/api/hello");
//! ```
//!
//! The method is never case-folded and trailing slashes are significant, so
//! `GET:/api/hello` and `get:/api/hello/` are unrelated keys.

mod binding;
mod key;

pub use binding::{HandlerReference, InvalidTarget, RouteBinding, RouteTarget, TARGET_SEPARATOR};
pub use key::{route_key, API_PREFIX};
