pub mod registry;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::RegistryType;

#[derive(Debug, Parser)]
#[command(
    name = "packreg",
    about = "Manage the buildpack registries configured for pack",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Path to the config file (default: $PACK_HOME/config.toml or ~/.pack/config.toml)
    #[arg(long, env = "PACKREG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage buildpack registries
    #[command(subcommand)]
    Registry(RegistrySubcommand),
}

#[derive(Debug, Subcommand)]
pub enum RegistrySubcommand {
    /// List the official registry and all configured registries
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a buildpack registry
    Add {
        /// Unique name for this registry
        name: String,
        /// URL of the registry index
        url: String,
        /// How the url is interpreted
        #[arg(long = "type", value_enum, default_value_t = RegistryType::Github)]
        kind: RegistryType,
        /// Make this registry the default
        #[arg(long)]
        default: bool,
    },

    /// Remove a buildpack registry
    Remove {
        /// Name of the registry to remove
        name: String,
    },

    /// Show the default registry, or set it when a name is given
    #[command(name = "default")]
    SetDefault {
        /// Registry to use as the default ("official" resets it)
        name: Option<String>,
    },
}
