//! Command-line interface for bundle-config
//!
//! Provides the main CLI structure using clap with subcommands for:
//! - `check`: Load and validate a configuration
//! - `show`: Print the normalized configuration
//! - `match`: Find the transform handler for a module path
//! - `resolve`: Look up the runtime global for an external import
//! - `init`: Write a starter configuration

mod check;
mod init;
mod lookup;
mod show;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use crate::config::BuildConfiguration;

pub use check::CheckCommand;
pub use init::InitCommand;
pub use lookup::{MatchCommand, ResolveCommand};
pub use show::ShowCommand;

/// Load, validate and inspect bundler configuration files
#[derive(Parser, Debug)]
#[command(name = "bundle-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (.toml or .json)
    #[arg(
        short,
        long,
        global = true,
        env = "BUNDLE_CONFIG",
        default_value = "bundle.toml"
    )]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the configuration
    Check(CheckCommand),

    /// Print the normalized configuration
    Show(ShowCommand),

    /// Show which transform handler a module path is sent to
    Match(MatchCommand),

    /// Show the runtime global an external import resolves to
    Resolve(ResolveCommand),

    /// Write a starter configuration file
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.execute(&self.config).await,
            Commands::Show(cmd) => cmd.execute(&self.config).await,
            Commands::Match(cmd) => cmd.execute(&self.config).await,
            Commands::Resolve(cmd) => cmd.execute(&self.config).await,
            Commands::Init(cmd) => cmd.execute().await,
        }
    }
}

/// Load the configuration named on the command line
fn load_config(path: &Path) -> Result<BuildConfiguration> {
    info!("Loading configuration from {}", path.display());
    BuildConfiguration::load(path)
}

/// Print the bundle-config banner
fn print_banner() {
    eprintln!(
        "\n{} {} {}\n",
        "⚡".cyan(),
        "bundle-config".bold().cyan(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
