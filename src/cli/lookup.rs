//! Rule and external lookups against a loaded configuration

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use super::load_config;

/// Show which transform handler a module path is sent to
#[derive(Args, Debug)]
pub struct MatchCommand {
    /// Module path as the bundler resolves it
    pub path: String,

    /// List every matching rule, not only the one that applies
    #[arg(long)]
    pub all: bool,
}

impl MatchCommand {
    pub async fn execute(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path)?;
        let rules = config.rule_set()?;

        let Some(handler) = rules.handler_for(&self.path) else {
            bail!("No transform rule matches {}", self.path);
        };

        println!("{}", handler);

        if self.all {
            for index in rules.matching(&self.path) {
                let rule = &rules.rules()[index];
                eprintln!(
                    "  {} rule #{} {} {} {}",
                    "•".dimmed(),
                    index,
                    rule.pattern().yellow(),
                    "→".dimmed(),
                    rule.handler_name()
                );
            }
        }

        Ok(())
    }
}

/// Show the runtime global an external import resolves to
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Import specifier, e.g. `react`
    pub specifier: String,
}

impl ResolveCommand {
    pub async fn execute(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path)?;

        match config.externals().global_for(&self.specifier) {
            Some(global) => println!("{}", global),
            None => eprintln!(
                "{} {} is not external and will be bundled",
                "→".blue(),
                self.specifier.cyan()
            ),
        }

        Ok(())
    }
}
