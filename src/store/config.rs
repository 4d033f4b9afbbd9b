use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PackregError;
use crate::model::Config;

/// Load/save boundary for the registry configuration file.
pub trait ConfigStore {
    fn load(&self, path: &Path) -> Result<Config, PackregError>;
    fn save(&self, config: &Config, path: &Path) -> Result<(), PackregError>;

    /// Like [`ConfigStore::load`], but a file that does not exist yet is an empty config.
    /// Any other failure to stat the path (permissions, a dangling link) is still an error.
    fn load_or_default(&self, path: &Path) -> Result<Config, PackregError> {
        match fs::symlink_metadata(path) {
            Ok(_) => self.load(path),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
            Err(source) => Err(PackregError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Stores the config as pretty-printed TOML.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlConfigStore;

impl ConfigStore for TomlConfigStore {
    fn load(&self, path: &Path) -> Result<Config, PackregError> {
        let content = fs::read_to_string(path).map_err(|source| PackregError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| PackregError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        config
            .validate()
            .map_err(|reason| PackregError::ConfigInvalid {
                path: path.to_path_buf(),
                reason,
            })?;

        debug!(
            path = %path.display(),
            registries = config.registries.len(),
            "loaded config"
        );
        Ok(config)
    }

    fn save(&self, config: &Config, path: &Path) -> Result<(), PackregError> {
        let path = &resolve_link(path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PackregError::DirCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(config)?;

        // Write next to the target and rename over it, so an interrupted write
        // never leaves a truncated config behind.
        let tmp = tmp_path(path);
        fs::write(&tmp, content).map_err(|source| PackregError::FileWrite {
            path: tmp.clone(),
            source,
        })?;
        if let Err(source) = keep_permissions(path, &tmp).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(PackregError::FileWrite {
                path: path.to_path_buf(),
                source,
            });
        }

        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

/// Follow a symlinked config to the file it points at, so the rename replaces
/// the target rather than the link.
fn resolve_link(path: &Path) -> Result<PathBuf, PackregError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|source| PackregError::FileWrite {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Copy the existing file's permissions onto the replacement.
fn keep_permissions(path: &Path, tmp: &Path) -> std::io::Result<()> {
    match fs::metadata(path) {
        Ok(meta) => fs::set_permissions(tmp, meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "config.toml".into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Resolve the config file location: `$PACK_HOME/config.toml`, else `~/.pack/config.toml`.
pub fn default_config_path() -> Result<PathBuf, PackregError> {
    if let Some(home) = std::env::var_os("PACK_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home).join("config.toml"));
    }
    dirs::home_dir()
        .map(|d| d.join(".pack").join("config.toml"))
        .ok_or(PackregError::ConfigDirNotFound)
}
