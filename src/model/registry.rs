use serde::{Deserialize, Serialize};

/// How a registry's url is interpreted when its index is fetched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RegistryType {
    #[default]
    Github,
    Git,
}

impl std::fmt::Display for RegistryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Github => write!(f, "github"),
            Self::Git => write!(f, "git"),
        }
    }
}

/// A named buildpack registry, stored as one `[[registries]]` entry in config.toml.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registry {
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: RegistryType,
}

impl Registry {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: RegistryType) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
        }
    }
}
