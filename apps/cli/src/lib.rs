//! # Vantage CLI
//!
//! Startup gate for the web application: loads the environment inputs, validates
//! them and either reports success or prints the normalized configuration.

pub mod args;

use crate::args::{Cli, Command, SourceArgs};
use anyhow::Context;
use std::io::Write;
use tracing::{error, info};
use vantage::env::{EnvLoader, EnvironmentConfig};

/// Executes the parsed command, writing command output to `out`.
///
/// # Errors
/// Returns an error if the environment is invalid or `out` cannot be written.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Check { source } => {
            let config = load(source)?;
            info!(base_url = %config.base_url, "Environment is valid");
        },
        Command::Print { source, pretty } => {
            let config = load(source)?;
            let json = if *pretty {
                serde_json::to_string_pretty(&config)
            } else {
                serde_json::to_string(&config)
            }
            .context("Failed to serialize configuration")?;
            writeln!(out, "{json}").context("Failed to write configuration")?;
        },
    }

    Ok(())
}

fn load(source: &SourceArgs) -> anyhow::Result<EnvironmentConfig> {
    load_with(&source.loader())
}

fn load_with(loader: &EnvLoader) -> anyhow::Result<EnvironmentConfig> {
    loader.load().map_err(|err| {
        error!(error = %err, key = ?err.key(), "Invalid environment configuration");
        anyhow::Error::new(err).context("Critical: environment configuration is invalid")
    })
}
