//! # Registry Module
//!
//! The handler store interface consumed by discovery.
//!
//! Handlers are not introspected at run time. Each handler type is declared
//! once, either in code through [`HandlerRegistry::register`] or in a YAML/JSON
//! manifest loaded with [`HandlerRegistry::load_manifest`]. Discovery then asks a
//! [`HandlerResolver`] for the definition whose fully-qualified name matches a
//! file found in the handler directory.
//!
//! ```rust
//! use brrtdispatch::registry::{HandlerDefinition, HandlerRegistry, HandlerResolver};
//! use brrtdispatch::route::RouteBinding;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register(
//!     HandlerDefinition::new("app::controllers::Greeter")
//!         .operation("hello", [RouteBinding::get("/hello")])
//!         .operation("bye", [RouteBinding::get("/bye"), RouteBinding::delete("/bye")]),
//! );
//! assert!(registry.resolve("app::controllers::Greeter").is_some());
//! ```

mod manifest;

pub use manifest::{HandlerManifest, ManifestHandler, ManifestOperation};

use crate::route::RouteBinding;
use std::collections::HashMap;

/// Whether discovery may inspect an operation's bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// One operation of a handler and the routes bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub visibility: Visibility,
    pub bindings: Vec<RouteBinding>,
}

impl Operation {
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A handler type with its declared operations, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDefinition {
    pub type_name: String,
    pub operations: Vec<Operation>,
}

impl HandlerDefinition {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            operations: Vec::new(),
        }
    }

    /// Add a public operation. Returns `self` for chaining.
    #[must_use]
    pub fn operation(
        self,
        name: impl Into<String>,
        bindings: impl IntoIterator<Item = RouteBinding>,
    ) -> Self {
        self.with_operation(name, Visibility::Public, bindings)
    }

    /// Add an operation discovery must not expose.
    #[must_use]
    pub fn private_operation(
        self,
        name: impl Into<String>,
        bindings: impl IntoIterator<Item = RouteBinding>,
    ) -> Self {
        self.with_operation(name, Visibility::Private, bindings)
    }

    fn with_operation(
        mut self,
        name: impl Into<String>,
        visibility: Visibility,
        bindings: impl IntoIterator<Item = RouteBinding>,
    ) -> Self {
        self.operations.push(Operation {
            name: name.into(),
            visibility,
            bindings: bindings.into_iter().collect(),
        });
        self
    }

    /// Public operations only, in declaration order.
    pub fn public_operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter().filter(|op| op.is_public())
    }
}

/// Looks up handler definitions by fully-qualified type name.
pub trait HandlerResolver {
    fn resolve(&self, type_name: &str) -> Option<&HandlerDefinition>;
}

/// In-memory [`HandlerResolver`] populated by explicit registration.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HandlerDefinition>,
}

impl HandlerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler definition, replacing any previous one with the same name.
    pub fn register(&mut self, definition: HandlerDefinition) -> &mut Self {
        self.handlers
            .insert(definition.type_name.clone(), definition);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl HandlerResolver for HandlerRegistry {
    fn resolve(&self, type_name: &str) -> Option<&HandlerDefinition> {
        self.handlers.get(type_name)
    }
}

impl<R: HandlerResolver + ?Sized> HandlerResolver for &R {
    fn resolve(&self, type_name: &str) -> Option<&HandlerDefinition> {
        (**self).resolve(type_name)
    }
}
