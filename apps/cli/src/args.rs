//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vantage::env::EnvLoader;
use vantage_logger::LevelFilter;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "vantage")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Validate and inspect the web application's environment configuration")]
pub struct Cli {
    /// Minimum log level when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "VANTAGE_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the environment and exit non-zero on the first invalid input
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the normalized configuration as JSON
    Print {
        #[command(flatten)]
        source: SourceArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Where the environment inputs come from.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Configuration file layered under the process environment (`.toml`, `.json`, `.yaml`)
    #[arg(short, long, env = "VANTAGE_ENV_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration source named in error messages (defaults to the file name)
    #[arg(short, long)]
    pub label: Option<String>,
}

impl SourceArgs {
    /// Builds a loader reading the process environment plus the optional file.
    #[must_use]
    pub fn loader(&self) -> EnvLoader {
        let mut loader = EnvLoader::new();

        if let Some(file) = &self.file {
            loader = loader.file(file);
        }

        let file_name = self
            .file
            .as_deref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());

        match self.label.clone().or(file_name) {
            Some(label) => loader.label(label),
            None => loader,
        }
    }
}
