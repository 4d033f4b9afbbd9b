use super::{Config, Registry, RegistryType};

pub fn registry(name: &str) -> Registry {
    Registry::new(
        name,
        format!("https://github.com/{name}/registry-index"),
        RegistryType::Github,
    )
}

/// `buildpack-registry` (the default) followed by `elbandito-registry`.
pub fn sample_config() -> Config {
    Config {
        default_registry_name: "buildpack-registry".into(),
        registries: vec![
            Registry::new(
                "buildpack-registry",
                "https://github.com/buildpacks/registry-index",
                RegistryType::Github,
            ),
            Registry::new(
                "elbandito-registry",
                "https://github.com/elbandito/registry-index",
                RegistryType::Github,
            ),
        ],
    }
}
