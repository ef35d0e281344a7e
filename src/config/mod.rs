//! Configuration handling for bundle-config
//!
//! Parses and validates bundler configuration files (`bundle.toml` or JSON).

mod error;
mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolver::Externals;
use crate::transform::RuleSet;
use crate::utils::{hash_content, normalize_module_path};

pub use error::ConfigError;
pub use schema::*;

/// On-disk representation of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Build configuration consumed by a bundler
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfiguration {
    /// Module from which dependency discovery begins
    #[serde(alias = "entryPoint", alias = "entry")]
    pub entry_point: String,

    /// Ordered transformation rules, first match wins
    #[serde(default, alias = "transformRules", alias = "rules")]
    pub transform_rules: Vec<TransformRule>,

    /// Modules left out of the bundle and read from a runtime global
    #[serde(
        default,
        alias = "externalAliases",
        alias = "externals",
        deserialize_with = "deserialize_unique_aliases"
    )]
    pub external_aliases: ExternalAliases,

    /// Directory relative paths are resolved against (the config file's directory)
    #[serde(skip, default = "default_root")]
    pub root: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

// `root` is where the record was loaded from, not part of the record.
impl PartialEq for BuildConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.entry_point == other.entry_point
            && self.transform_rules == other.transform_rules
            && self.external_aliases == other.external_aliases
    }
}

impl Eq for BuildConfiguration {}

impl BuildConfiguration {
    /// Construct a configuration from literal values
    pub fn new(
        entry_point: impl Into<String>,
        transform_rules: Vec<TransformRule>,
        external_aliases: ExternalAliases,
    ) -> Self {
        Self {
            entry_point: entry_point.into(),
            transform_rules,
            external_aliases,
            root: default_root(),
        }
    }

    /// Load configuration from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let format = ConfigFormat::from_path(&canonical_path).with_context(|| {
            format!(
                "Unsupported config file extension (expected .toml or .json): {}",
                canonical_path.display()
            )
        })?;

        let content = fs::read_to_string(&canonical_path)
            .with_context(|| format!("Failed to read config file: {}", canonical_path.display()))?;

        debug!("Parsing {:?} configuration from {}", format, canonical_path.display());

        let mut config = Self::parse(&content, format)
            .with_context(|| format!("Invalid config file: {}", canonical_path.display()))?;

        // Set root directory to the directory containing the config file
        config.root = canonical_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(default_root);

        Ok(config)
    }

    /// Parse and validate configuration text in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(content),
            ConfigFormat::Json => Self::from_json_str(content),
        }
    }

    /// Parse and validate TOML configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BuildConfiguration =
            toml::from_str(content).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON configuration text
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: BuildConfiguration =
            serde_json::from_str(content).context("Failed to parse JSON configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize in the given format
    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => self.to_toml_string(),
            ConfigFormat::Json => self.to_json_string(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration as TOML")
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration as JSON")
    }

    /// The reference configuration written by `init`
    pub fn sample() -> Self {
        let mut aliases = ExternalAliases::new();
        aliases.insert("react".to_string(), "React".to_string());
        aliases.insert("react-dom".to_string(), "ReactDOM".to_string());

        Self::new(
            "./src/App.entry",
            vec![TransformRule::new(r"\.fs(x|proj)?$", "fable-loader")],
            aliases,
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entry_point.trim().is_empty() {
            return Err(ConfigError::EmptyEntryPoint);
        }

        RuleSet::compile(&self.transform_rules)?;

        for (index, rule) in self.transform_rules.iter().enumerate() {
            if rule.handler_name.trim().is_empty() {
                return Err(ConfigError::EmptyHandler { index });
            }
        }

        for (module, global) in &self.external_aliases {
            if module.trim().is_empty() {
                return Err(ConfigError::EmptyAliasKey);
            }
            if global.trim().is_empty() {
                return Err(ConfigError::EmptyAliasGlobal {
                    module: module.clone(),
                });
            }
        }

        debug!(
            "Validated configuration: {} rule(s), {} external(s)",
            self.transform_rules.len(),
            self.external_aliases.len()
        );

        Ok(())
    }

    /// Compile the transform rules for matching
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        RuleSet::compile(&self.transform_rules)
    }

    /// Lookup view over the external aliases
    pub fn externals(&self) -> Externals<'_> {
        Externals::new(&self.external_aliases)
    }

    /// Get the path of the entry module relative to the config file
    ///
    /// `..` segments are kept; the filesystem resolves them.
    pub fn entry_path(&self) -> PathBuf {
        self.root.join(normalize_module_path(&self.entry_point))
    }

    /// Stable hash of the record's contents
    ///
    /// Computed over the JSON form, so it does not depend on the input format
    /// or on the order aliases were written in.
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = serde_json::to_vec(self).context("Failed to serialize configuration")?;
        Ok(hash_content(&canonical))
    }
}
