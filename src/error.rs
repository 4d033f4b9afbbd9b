use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackregError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("failed to determine config location; set PACK_HOME or --config")]
    ConfigDirNotFound,

    #[error("'official' is a reserved registry name, please provide a different registry")]
    ReservedName,

    #[error("registry '{name}' does not exist")]
    RegistryNotFound { name: String },

    #[error("registry '{name}' already exists")]
    RegistryExists { name: String },

    #[error("invalid registry name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("registry '{name}' must have a url")]
    InvalidUrl { name: String },
}
