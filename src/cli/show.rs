//! Show command implementation

use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::load_config;
use crate::config::ConfigFormat;

/// Print the normalized configuration
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

impl ShowCommand {
    pub async fn execute(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path)?;

        let rendered = config.serialize(self.format)?;
        let fingerprint = config.fingerprint()?;

        match self.format {
            ConfigFormat::Toml => println!("# fingerprint: {}\n{}", fingerprint, rendered.trim_end()),
            ConfigFormat::Json => {
                println!("{}", rendered);
                eprintln!("fingerprint: {}", fingerprint);
            }
        }

        Ok(())
    }
}
