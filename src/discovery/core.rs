use crate::error::{DispatchError, Result};
use crate::registry::HandlerResolver;
use crate::route::RouteTarget;
use crate::table::RouteTable;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extension of handler definition files when none is configured.
pub const DEFAULT_HANDLER_EXTENSION: &str = "rs";

/// Why a handler file contributed no routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkipReason {
    /// The file stem is not a valid type identifier.
    NotIdentifier,
    /// No handler is registered under the derived name.
    Unresolved,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotIdentifier => write!(f, "file name is not a valid handler identifier"),
            SkipReason::Unresolved => write!(f, "no handler registered under this name"),
        }
    }
}

/// A handler file that was passed over during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedHandler {
    pub file: PathBuf,
    /// Fully-qualified name derived from the file
    pub type_name: String,
    pub reason: SkipReason,
}

/// Outcome of a discovery pass: the table plus skipped-file diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    pub table: RouteTable,
    pub skipped: Vec<SkippedHandler>,
}

pub(super) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Scan `store` for handler definition files and collect their routes.
///
/// # Errors
///
/// [`DispatchError::EmptyStore`] when `store` cannot be listed. Individual
/// handlers that fail to resolve are reported in [`Discovery::skipped`].
pub fn scan<R>(store: &Path, namespace_root: &str, extension: &str, resolver: &R) -> Result<Discovery>
where
    R: HandlerResolver + ?Sized,
{
    let entries = std::fs::read_dir(store).map_err(|source| DispatchError::EmptyStore {
        path: store.to_path_buf(),
        source,
    })?;

    let mut discovery = Discovery::default();
    let mut handlers_seen = 0usize;

    for entry in entries {
        let entry = entry.map_err(|source| DispatchError::EmptyStore {
            path: store.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if file_name == "." || file_name == ".." {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        // flat layout only
        if path.is_dir() {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let type_name = format!("{namespace_root}{stem}");

        if !is_identifier(&stem) {
            warn!(file = %path.display(), type_name = %type_name, "skipping handler: malformed name");
            discovery.skipped.push(SkippedHandler {
                file: path,
                type_name,
                reason: SkipReason::NotIdentifier,
            });
            continue;
        }

        let Some(definition) = resolver.resolve(&type_name) else {
            warn!(file = %path.display(), type_name = %type_name, "skipping handler: not registered");
            discovery.skipped.push(SkippedHandler {
                file: path,
                type_name,
                reason: SkipReason::Unresolved,
            });
            continue;
        };

        handlers_seen += 1;
        for operation in definition.public_operations() {
            for binding in &operation.bindings {
                let key = binding.key();
                let target = RouteTarget::new(definition.type_name.as_str(), operation.name.as_str());
                debug!(route = %key, target = %target, "discovered route");
                if let Some(previous) = discovery.table.insert(key.clone(), target) {
                    debug!(route = %key, replaced = %previous, "route key collision, keeping latest");
                }
            }
        }
    }

    info!(
        store = %store.display(),
        handlers = handlers_seen,
        routes_count = discovery.table.len(),
        skipped = discovery.skipped.len(),
        "Handler discovery complete"
    );
    Ok(discovery)
}
