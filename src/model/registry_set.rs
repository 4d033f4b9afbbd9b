use super::config::{Config, OFFICIAL_REGISTRY_NAME};
use super::registry::Registry;
use crate::error::PackregError;

/// Index of the registry with exactly this name (case-sensitive).
pub fn find_by_name(config: &Config, name: &str) -> Option<usize> {
    config.registries.iter().position(|r| r.name == name)
}

/// Remove a registry by name, returning a new config. The input is never modified.
///
/// The reserved name is rejected before any lookup. If the removed registry was the
/// default, the default falls back to the official registry.
pub fn remove(config: &Config, name: &str) -> Result<Config, PackregError> {
    if name == OFFICIAL_REGISTRY_NAME {
        return Err(PackregError::ReservedName);
    }

    let index = find_by_name(config, name).ok_or_else(|| PackregError::RegistryNotFound {
        name: name.to_string(),
    })?;

    let registries = config
        .registries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, r)| r.clone())
        .collect();

    let default_registry_name = if config.is_default(name) {
        OFFICIAL_REGISTRY_NAME.to_string()
    } else {
        config.default_registry_name.clone()
    };

    Ok(Config {
        default_registry_name,
        registries,
    })
}

/// Append a new registry, optionally making it the default.
pub fn add(config: &Config, registry: Registry, set_default: bool) -> Result<Config, PackregError> {
    if registry.name == OFFICIAL_REGISTRY_NAME {
        return Err(PackregError::ReservedName);
    }
    validate_name(&registry.name)?;
    if registry.url.trim().is_empty() {
        return Err(PackregError::InvalidUrl {
            name: registry.name,
        });
    }
    if find_by_name(config, &registry.name).is_some() {
        return Err(PackregError::RegistryExists {
            name: registry.name,
        });
    }

    let mut updated = config.clone();
    if set_default {
        updated.default_registry_name = registry.name.clone();
    }
    updated.registries.push(registry);
    Ok(updated)
}

/// Point the default at `name`. The official registry is always a valid target.
pub fn set_default(config: &Config, name: &str) -> Result<Config, PackregError> {
    if name != OFFICIAL_REGISTRY_NAME && find_by_name(config, name).is_none() {
        return Err(PackregError::RegistryNotFound {
            name: name.to_string(),
        });
    }

    let mut updated = config.clone();
    updated.default_registry_name = name.to_string();
    Ok(updated)
}

fn validate_name(name: &str) -> Result<(), PackregError> {
    if name.is_empty() {
        return Err(PackregError::InvalidName {
            name: name.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(PackregError::InvalidName {
            name: name.to_string(),
            reason: "name must contain only alphanumeric characters, hyphens, underscores, or dots"
                .to_string(),
        });
    }
    Ok(())
}
