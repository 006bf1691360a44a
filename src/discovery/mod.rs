//! # Discovery Module
//!
//! Builds a [`RouteTable`](crate::table::RouteTable) by walking a flat handler
//! directory.
//!
//! ## Algorithm
//!
//! 1. List the entries of the store directory. Listing failures abort the scan
//!    with [`DispatchError::EmptyStore`](crate::error::DispatchError::EmptyStore).
//! 2. Keep regular files whose extension marks them as handler definitions.
//!    Sub-directories are ignored; the layout is flat.
//! 3. Derive the handler's fully-qualified name as `namespace_root + file_stem`
//!    and ask the [`HandlerResolver`](crate::registry::HandlerResolver) for it.
//! 4. For every binding on every public operation, insert
//!    `route_key(method, path) → Type::operation`. Later bindings overwrite
//!    earlier ones with the same key.
//!
//! A file whose handler cannot be resolved never aborts the scan. It is
//! skipped, logged at `warn`, and reported in [`Discovery::skipped`].
//!
//! ## Ordering
//!
//! Files are visited in the order the operating system lists them. That order
//! is not guaranteed to be stable, so when two handlers bind the same key the
//! surviving entry depends on the platform listing order.

mod core;

pub use self::core::{scan, Discovery, SkipReason, SkippedHandler, DEFAULT_HANDLER_EXTENSION};
