pub mod config;

pub use config::{default_config_path, ConfigStore, TomlConfigStore};
