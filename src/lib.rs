//! bundle-config library
//!
//! Loads and validates the declarative configuration a bundler reads at
//! startup: one entry module, ordered transform rules, and external aliases.

pub mod cli;
pub mod config;
pub mod resolver;
pub mod transform;
pub mod utils;

pub use cli::Cli;
pub use config::{BuildConfiguration, ConfigError, ConfigFormat, TransformRule};
pub use resolver::Externals;
pub use transform::RuleSet;
