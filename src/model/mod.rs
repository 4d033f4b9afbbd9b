pub mod config;
pub mod registry;
pub mod registry_set;
#[cfg(test)]
pub(crate) mod testing;

pub use config::{Config, OFFICIAL_REGISTRY_NAME};
pub use registry::{Registry, RegistryType};
