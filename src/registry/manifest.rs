use super::{HandlerDefinition, HandlerRegistry, Operation, Visibility};
use crate::error::{DispatchError, Result};
use crate::route::RouteBinding;
use serde::Deserialize;
use std::path::Path;

/// Declarative handler list, the file form of [`HandlerRegistry`].
///
/// ```yaml
/// handlers:
///   - type: app::controllers::Greeter
///     operations:
///       - name: hello
///         routes:
///           - { method: GET, path: /hello }
///       - name: helper
///         visibility: private
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerManifest {
    #[serde(default)]
    pub handlers: Vec<ManifestHandler>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestHandler {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub operations: Vec<ManifestOperation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestOperation {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub routes: Vec<RouteBinding>,
}

impl HandlerManifest {
    /// Parse manifest text; `yaml` selects the YAML parser, JSON otherwise.
    pub fn parse(content: &str, yaml: bool) -> std::result::Result<Self, String> {
        if yaml {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(content).map_err(|e| e.to_string())
        }
    }

    #[must_use]
    pub fn into_registry(self) -> HandlerRegistry {
        let mut registry = HandlerRegistry::new();
        for handler in self.handlers {
            let operations = handler
                .operations
                .into_iter()
                .map(|op| Operation {
                    name: op.name,
                    visibility: op.visibility,
                    bindings: op.routes,
                })
                .collect();
            registry.register(HandlerDefinition {
                type_name: handler.type_name,
                operations,
            });
        }
        registry
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

impl HandlerRegistry {
    /// Build a registry from a YAML (`.yaml`/`.yml`) or JSON manifest file.
    pub fn load_manifest(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DispatchError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let manifest =
            HandlerManifest::parse(&content, is_yaml(path)).map_err(|message| {
                DispatchError::Manifest {
                    path: path.to_path_buf(),
                    message,
                }
            })?;
        Ok(manifest.into_registry())
    }
}
