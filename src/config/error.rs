//! Validation errors for bundle configuration

use thiserror::Error;

/// A configuration record that parsed but violates a schema invariant
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("entry_point must not be empty")]
    EmptyEntryPoint,

    #[error("transform rule #{index} has an invalid match_pattern `{pattern}`: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("transform rule #{index} has an empty handler_name")]
    EmptyHandler { index: usize },

    #[error("external_aliases contains an empty module name")]
    EmptyAliasKey,

    #[error("external alias `{module}` maps to an empty global name")]
    EmptyAliasGlobal { module: String },
}
