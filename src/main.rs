use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod model;
mod store;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose {
                "packreg=debug"
            } else {
                "packreg=info"
            })
        }))
        .init();

    match cli.command {
        cli::Command::Registry(cmd) => cli::registry::run(cli.config.as_ref(), cmd),
    }
}
