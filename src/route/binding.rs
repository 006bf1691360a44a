use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::key::route_key;

/// Separator between handler type and operation in a stored [`RouteTarget`].
pub const TARGET_SEPARATOR: &str = "::";

/// A `{method, path}` pair attached to one operation of a handler.
///
/// Bindings are declared by handler authors and never mutated afterwards.
/// Both fields are kept verbatim; normalisation happens only when the
/// canonical key is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteBinding {
    /// HTTP method as written by the author (e.g. `GET`)
    pub method: String,
    /// Path template as written by the author (e.g. `/hello`)
    pub path: String,
}

impl RouteBinding {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new("PUT", path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new("PATCH", path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new("DELETE", path)
    }

    /// Canonical route key for this binding.
    #[must_use]
    pub fn key(&self) -> String {
        route_key(&self.method, &self.path)
    }
}

/// The `HandlerType::operation` value a route key points at.
///
/// Serialises as a single string so the cache file stays a flat
/// key → string mapping. Parsing splits at the *last* `::`, which keeps
/// namespaced handler types such as `app::controllers::Greeter` intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteTarget {
    /// Fully-qualified handler type name
    pub handler_type: String,
    /// Operation (method) name on the handler
    pub operation: String,
}

impl RouteTarget {
    pub fn new(handler_type: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            handler_type: handler_type.into(),
            operation: operation.into(),
        }
    }

    /// Turn the stored target into the lookup result.
    #[must_use]
    pub fn to_reference(&self) -> HandlerReference {
        HandlerReference {
            handler_type: self.handler_type.clone(),
            operation: self.operation.clone(),
            kind: String::new(),
        }
    }
}

impl Display for RouteTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.handler_type, TARGET_SEPARATOR, self.operation)
    }
}

/// Error returned when a stored target has no `::` separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTarget(pub String);

impl Display for InvalidTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid route target '{}': expected Type::operation", self.0)
    }
}

impl std::error::Error for InvalidTarget {}

impl FromStr for RouteTarget {
    type Err = InvalidTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(TARGET_SEPARATOR) {
            Some((handler_type, operation)) if !handler_type.is_empty() && !operation.is_empty() => {
                Ok(RouteTarget::new(handler_type, operation))
            }
            _ => Err(InvalidTarget(s.to_string())),
        }
    }
}

impl Serialize for RouteTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RouteTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<RouteTarget>().map_err(serde::de::Error::custom)
    }
}

/// Result of a successful lookup.
///
/// `kind` is reserved and always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerReference {
    pub handler_type: String,
    pub operation: String,
    pub kind: String,
}

impl HandlerReference {
    /// `(handler_type, operation)` view of the reference.
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.handler_type, &self.operation)
    }
}
