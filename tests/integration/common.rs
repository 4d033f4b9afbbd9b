use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Two registries with `buildpack-registry` as the default.
pub const SAMPLE_CONFIG: &str = r#"default-registry-name = "buildpack-registry"

[[registries]]
name = "buildpack-registry"
url = "https://github.com/buildpacks/registry-index"
type = "github"

[[registries]]
name = "elbandito-registry"
url = "https://github.com/elbandito/registry-index"
type = "github"
"#;

pub struct TestEnv {
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("failed to create home"),
        }
    }

    /// Same as `new`, with `SAMPLE_CONFIG` already on disk.
    pub fn with_sample_config() -> Self {
        let env = Self::new();
        env.write_config(SAMPLE_CONFIG);
        env
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join("config.toml")
    }

    /// Build a packreg Command pre-configured with --config pointing into the temp home.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("packreg"));
        cmd.arg("--config")
            .arg(self.config_path())
            .env_remove("PACKREG_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).unwrap();
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap()
    }

    /// Parse the config file and return `(default, [registry names in order])`.
    pub fn registries(&self) -> (String, Vec<String>) {
        let value: toml::Value = toml::from_str(&self.read_config()).unwrap();
        let default = value
            .get("default-registry-name")
            .and_then(|v| v.as_str())
            .unwrap_or("official")
            .to_string();
        let names = value
            .get("registries")
            .and_then(|v| v.as_array())
            .map(|regs| {
                regs.iter()
                    .map(|r| r["name"].as_str().unwrap().to_string())
                    .collect()
            })
            .unwrap_or_default();
        (default, names)
    }
}
