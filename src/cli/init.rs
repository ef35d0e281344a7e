//! Configuration scaffolding command

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use super::print_banner;
use crate::config::{BuildConfiguration, ConfigFormat};

/// Write a starter configuration file
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Project directory
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Entry module to start dependency discovery from
    #[arg(short, long)]
    pub entry: Option<String>,

    /// File format to write
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub async fn execute(&self) -> Result<()> {
        print_banner();

        let target = self.target_path();
        if target.exists() && !self.force {
            bail!(
                "{} already exists (pass --force to overwrite)",
                target.display()
            );
        }

        eprintln!("{} Writing starter configuration...\n", "→".blue());

        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;

        let content = self.generate_config()?;
        fs::write(&target, content)
            .with_context(|| format!("Failed to write {}", target.display()))?;

        eprintln!("  {} Created {}", "✓".green(), target.display().to_string().cyan());
        eprintln!("\n  Next steps:");
        eprintln!(
            "    {} bundle-config --config {} check",
            "→".dimmed(),
            target.display()
        );
        eprintln!();

        Ok(())
    }

    fn target_path(&self) -> PathBuf {
        let file_name = match self.format {
            ConfigFormat::Toml => "bundle.toml",
            ConfigFormat::Json => "bundle.json",
        };
        Path::new(&self.dir).join(file_name)
    }

    fn generate_config(&self) -> Result<String> {
        let sample = BuildConfiguration::sample();
        let config = match &self.entry {
            Some(entry) => BuildConfiguration::new(
                entry.clone(),
                sample.transform_rules,
                sample.external_aliases,
            ),
            None => sample,
        };
        config.validate()?;

        let body = config.serialize(self.format)?;
        Ok(match self.format {
            ConfigFormat::Toml => format!(
                "# Bundler configuration\n# Rules are tried in order; the first matching pattern picks the loader.\n\n{}",
                body
            ),
            ConfigFormat::Json => format!("{}\n", body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(dir: &Path, format: ConfigFormat) -> InitCommand {
        InitCommand {
            dir: dir.to_path_buf(),
            entry: None,
            format,
            force: false,
        }
    }

    #[test]
    fn test_generated_toml_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = command(dir.path(), ConfigFormat::Toml);

        let text = cmd.generate_config().unwrap();
        assert!(text.starts_with("# Bundler configuration"));
        assert_eq!(
            BuildConfiguration::from_toml_str(&text).unwrap(),
            BuildConfiguration::sample()
        );
    }

    #[test]
    fn test_entry_override() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(dir.path(), ConfigFormat::Json);
        cmd.entry = Some("./src/Main.fsproj".to_string());

        let config = BuildConfiguration::from_json_str(&cmd.generate_config().unwrap()).unwrap();
        assert_eq!(config.entry_point, "./src/Main.fsproj");
        assert_eq!(cmd.target_path(), dir.path().join("bundle.json"));
    }

    #[test]
    fn test_empty_entry_override_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(dir.path(), ConfigFormat::Toml);
        cmd.entry = Some(String::new());

        assert!(cmd.generate_config().is_err());
    }
}
