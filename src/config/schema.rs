//! Configuration schema definitions

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A single module transformation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformRule {
    /// Regular expression tested against a module's resolved path
    ///
    /// Uses Rust `regex` syntax: look-around and backreferences are rejected
    /// at load time, so JavaScript patterns like `node_modules\/(?!foo)` need
    /// rewriting.
    #[serde(alias = "matchPattern", alias = "test")]
    pub match_pattern: String,

    /// Loader the bundler runs on matching modules
    #[serde(alias = "handlerName", alias = "use")]
    pub handler_name: String,
}

impl TransformRule {
    pub fn new(match_pattern: impl Into<String>, handler_name: impl Into<String>) -> Self {
        Self {
            match_pattern: match_pattern.into(),
            handler_name: handler_name.into(),
        }
    }
}

/// Import name to runtime global name
pub type ExternalAliases = BTreeMap<String, String>;

/// Deserialize an alias table, rejecting repeated keys.
///
/// TOML already refuses duplicate keys while parsing; JSON objects do not,
/// and a plain map would silently keep the last value.
pub(crate) fn deserialize_unique_aliases<'de, D>(deserializer: D) -> Result<ExternalAliases, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueAliases;

    impl<'de> Visitor<'de> for UniqueAliases {
        type Value = ExternalAliases;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of module names to global names")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut aliases = ExternalAliases::new();
            while let Some((module, global)) = access.next_entry::<String, String>()? {
                if aliases.contains_key(&module) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate external alias `{}`",
                        module
                    )));
                }
                aliases.insert(module, global);
            }
            Ok(aliases)
        }
    }

    deserializer.deserialize_map(UniqueAliases)
}
