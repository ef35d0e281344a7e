//! Check command implementation

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::{load_config, print_banner};

/// Load and validate the configuration
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Also require the entry module to exist on disk
    #[arg(long)]
    pub resolve_entry: bool,
}

impl CheckCommand {
    pub async fn execute(&self, config_path: &Path) -> Result<()> {
        print_banner();

        let config = load_config(config_path)?;

        if self.resolve_entry {
            let entry = config.entry_path();
            if !entry.exists() {
                bail!(
                    "Entry point '{}' points to non-existent file: {}",
                    config.entry_point,
                    entry.display()
                );
            }
        }

        eprintln!(
            "{} {} is valid\n",
            "✓".green().bold(),
            config_path.display().to_string().cyan()
        );

        eprintln!("  {} entry      {}", "•".dimmed(), config.entry_point.cyan());

        for (index, rule) in config.transform_rules.iter().enumerate() {
            eprintln!(
                "  {} rule #{}    {} {} {}",
                "•".dimmed(),
                index,
                rule.match_pattern.yellow(),
                "→".dimmed(),
                rule.handler_name
            );
        }

        let externals = config.externals();
        for (module, global) in externals.iter() {
            eprintln!(
                "  {} external   {} {} {}",
                "•".dimmed(),
                module.cyan(),
                "→".dimmed(),
                global
            );
        }

        for (module, global) in externals.suspicious_globals() {
            eprintln!(
                "  {} external '{}' maps to '{}', which is not a global identifier",
                "!".yellow().bold(),
                module,
                global
            );
        }

        eprintln!();

        Ok(())
    }
}
