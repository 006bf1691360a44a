//! # CLI Module
//!
//! Command-line front end for discovery, cache maintenance and lookups.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Scan the handler directory, reconcile the cache and print the route table:
//!
//! ```bash
//! brrtdispatch --registry handlers.yaml --store src/controllers \
//!     --namespace "app::controllers::" --cache target/routes.json routes
//! ```
//!
//! ### `resolve`
//!
//! Resolve one request and print the handler reference as JSON:
//!
//! ```bash
//! brrtdispatch --registry handlers.yaml --store src/controllers \
//!     --namespace "app::controllers::" resolve --method GET --path /hello
//! ```
//!
//! A miss exits non-zero with `Route [GET] /api/hello Not Found`.
//!
//! ## Configuration precedence
//!
//! `--config` file, then `BRRTD_*` environment variables, then flags.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands, SourceArgs};
