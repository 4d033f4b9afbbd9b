use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use super::RegistrySubcommand;
use crate::error::PackregError;
use crate::model::{registry_set, Config, Registry, RegistryType};
use crate::store::{default_config_path, ConfigStore, TomlConfigStore};

pub fn run(config_path: Option<&PathBuf>, cmd: RegistrySubcommand) -> Result<()> {
    let path = match config_path {
        Some(p) => p.clone(),
        None => default_config_path()?,
    };
    let store = TomlConfigStore;
    let config = store
        .load_or_default(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    match cmd {
        RegistrySubcommand::List { json } => run_list(&config, json),
        RegistrySubcommand::Add {
            name,
            url,
            kind,
            default,
        } => {
            let registry = Registry::new(name.clone(), url.clone(), kind);
            add_registry(&store, config, registry, default, &path)?;
            println!("Added registry '{name}' from {url}");
            if default {
                println!("Default registry set to '{name}'");
            }
            Ok(())
        }
        RegistrySubcommand::Remove { name } => {
            remove_registry(&store, config, &name, &path)?;
            println!("Removed registry '{name}'");
            Ok(())
        }
        RegistrySubcommand::SetDefault { name: None } => {
            let registry = config.default_registry()?;
            println!("{} ({})", registry.name, registry.url);
            Ok(())
        }
        RegistrySubcommand::SetDefault { name: Some(name) } => {
            set_default_registry(&store, config, &name, &path)?;
            println!("Default registry set to '{name}'");
            Ok(())
        }
    }
}

/// Remove `name` from `config` and persist the result to `path`.
///
/// Nothing is written when the removal itself fails.
pub fn remove_registry<S: ConfigStore>(
    store: &S,
    config: Config,
    name: &str,
    path: &Path,
) -> Result<Config, PackregError> {
    let updated = registry_set::remove(&config, name)?;
    if updated.default_registry_name != config.default_registry_name {
        debug!(
            registry = name,
            default = %updated.default_registry_name,
            "removed registry was the default; falling back"
        );
    }
    store.save(&updated, path)?;
    info!(registry = name, "removed registry");
    Ok(updated)
}

pub fn add_registry<S: ConfigStore>(
    store: &S,
    config: Config,
    registry: Registry,
    set_default: bool,
    path: &Path,
) -> Result<Config, PackregError> {
    let name = registry.name.clone();
    let updated = registry_set::add(&config, registry, set_default)?;
    store.save(&updated, path)?;
    info!(registry = %name, default = set_default, "added registry");
    Ok(updated)
}

pub fn set_default_registry<S: ConfigStore>(
    store: &S,
    config: Config,
    name: &str,
    path: &Path,
) -> Result<Config, PackregError> {
    let updated = registry_set::set_default(&config, name)?;
    store.save(&updated, path)?;
    info!(registry = name, "set default registry");
    Ok(updated)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RegistryListing {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: RegistryType,
    pub default: bool,
}

/// The official registry followed by the configured ones, in config order.
pub fn list_registries(config: &Config) -> Vec<RegistryListing> {
    std::iter::once(Config::official_registry())
        .chain(config.registries.iter().cloned())
        .map(|r| RegistryListing {
            default: config.is_default(&r.name),
            name: r.name,
            url: r.url,
            kind: r.kind,
        })
        .collect()
}

fn run_list(config: &Config, json: bool) -> Result<()> {
    let listings = list_registries(config);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&listings).context("failed to serialize registries")?
        );
        return Ok(());
    }

    let width = listings.iter().map(|l| l.name.len()).max().unwrap_or(0);
    for l in &listings {
        let marker = if l.default { "*" } else { " " };
        println!("{marker} {:<width$}  {} ({})", l.name, l.url, l.kind);
    }
    Ok(())
}
