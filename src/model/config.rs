use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::registry::{Registry, RegistryType};
use crate::error::PackregError;

/// Name of the built-in registry. Never stored as an explicit entry.
pub const OFFICIAL_REGISTRY_NAME: &str = "official";
pub const OFFICIAL_REGISTRY_URL: &str = "https://github.com/buildpacks/registry-index";

/// The persisted registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(
        default = "default_registry_name",
        skip_serializing_if = "is_official"
    )]
    pub default_registry_name: String,
    #[serde(default)]
    pub registries: Vec<Registry>,
}

fn default_registry_name() -> String {
    OFFICIAL_REGISTRY_NAME.to_string()
}

fn is_official(name: &String) -> bool {
    name == OFFICIAL_REGISTRY_NAME
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_registry_name: default_registry_name(),
            registries: Vec::new(),
        }
    }
}

impl Config {
    pub fn official_registry() -> Registry {
        Registry::new(OFFICIAL_REGISTRY_NAME, OFFICIAL_REGISTRY_URL, RegistryType::Github)
    }

    /// Resolve a registry by name. An empty name means the configured default, and
    /// "official" yields the built-in registry.
    pub fn registry(&self, name: &str) -> Result<Registry, PackregError> {
        let name = if name.is_empty() {
            self.default_registry_name.as_str()
        } else {
            name
        };
        if name.is_empty() || name == OFFICIAL_REGISTRY_NAME {
            return Ok(Self::official_registry());
        }
        self.registries
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| PackregError::RegistryNotFound {
                name: name.to_string(),
            })
    }

    pub fn default_registry(&self) -> Result<Registry, PackregError> {
        self.registry("")
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.default_registry_name == name
    }

    /// Check the structural invariants. Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for registry in &self.registries {
            if registry.name.is_empty() {
                return Err("registry with empty name".to_string());
            }
            if registry.name == OFFICIAL_REGISTRY_NAME {
                return Err(format!(
                    "'{OFFICIAL_REGISTRY_NAME}' cannot be configured as an explicit registry"
                ));
            }
            if !seen.insert(registry.name.as_str()) {
                return Err(format!("duplicate registry '{}'", registry.name));
            }
        }

        if self.default_registry_name != OFFICIAL_REGISTRY_NAME
            && !seen.contains(self.default_registry_name.as_str())
        {
            return Err(format!(
                "default registry '{}' is not configured",
                self.default_registry_name
            ));
        }
        Ok(())
    }
}
