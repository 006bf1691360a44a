use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while building or querying a [`Dispatcher`](crate::dispatcher::Dispatcher).
///
/// Everything except [`DispatchError::RouteNotFound`] is fatal to the call that
/// produced it. A route miss is the ordinary "no handler for this request"
/// signal and callers are expected to recover from it.
#[derive(Debug)]
pub enum DispatchError {
    /// Construction parameters are unusable (store path is not a readable
    /// directory, or the namespace root is empty).
    NotConfigured {
        /// Human readable explanation
        reason: String,
    },
    /// The handler store directory could not be enumerated.
    EmptyStore {
        /// Store location that failed to list
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// The cache file exists but could not be opened for reading.
    CacheIo {
        /// Cache file location
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// The cache file could not be (re)written.
    CacheWrite {
        /// Cache file location
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// A handler manifest or configuration file could not be read or parsed.
    Manifest {
        /// File that failed to load
        path: PathBuf,
        /// Parser or I/O message
        message: String,
    },
    /// No route is registered for the requested method and path.
    RouteNotFound {
        /// `[METHOD] /path` rendering of the canonical key
        route: String,
    },
}

impl DispatchError {
    /// Build a [`DispatchError::RouteNotFound`] from a canonical route key.
    ///
    /// Keys of the form `METHOD:/path` render as `[METHOD] /path`; a key with no
    /// separator is carried through untouched.
    pub fn route_not_found(key: &str) -> Self {
        let route = match key.split_once(':') {
            Some((method, path)) => format!("[{method}] {path}"),
            None => key.to_string(),
        };
        DispatchError::RouteNotFound { route }
    }

    /// `true` for the recoverable lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchError::RouteNotFound { .. })
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NotConfigured { reason } => {
                write!(f, "Dispatcher is not configured: {reason}. Abort dispatching")
            }
            DispatchError::EmptyStore { path, source } => {
                write!(
                    f,
                    "Was not able to scan the handler directory '{}': {source}",
                    path.display()
                )
            }
            DispatchError::CacheIo { path, source } => {
                write!(
                    f,
                    "Not able to open route cache '{}' for reading: {source}",
                    path.display()
                )
            }
            DispatchError::CacheWrite { path, source } => {
                write!(f, "Not able to write route cache '{}': {source}", path.display())
            }
            DispatchError::Manifest { path, message } => {
                write!(f, "Failed to load '{}': {message}", path.display())
            }
            DispatchError::RouteNotFound { route } => write!(f, "Route {route} Not Found"),
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::EmptyStore { source, .. }
            | DispatchError::CacheIo { source, .. }
            | DispatchError::CacheWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DispatchError>;
