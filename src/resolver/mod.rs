//! External module resolution
//!
//! Answers whether an import specifier is left out of the bundle and which
//! runtime global stands in for it.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::ExternalAliases;

/// Dotted JavaScript identifier path, e.g. `React` or `window.ReactDOM`
static GLOBAL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").unwrap()
});

/// Read-only view over a configuration's external aliases
#[derive(Debug, Clone, Copy)]
pub struct Externals<'a> {
    aliases: &'a ExternalAliases,
}

impl<'a> Externals<'a> {
    pub fn new(aliases: &'a ExternalAliases) -> Self {
        Self { aliases }
    }

    /// Runtime global for an import specifier, if it is external
    ///
    /// Matching is exact: `react-dom/server` is only external when listed itself.
    pub fn global_for(&self, specifier: &str) -> Option<&'a str> {
        let aliases: &'a ExternalAliases = self.aliases;
        let global = aliases.get(specifier).map(String::as_str);
        debug!("External lookup {} -> {:?}", specifier, global);
        global
    }

    pub fn is_external(&self, specifier: &str) -> bool {
        self.aliases.contains_key(specifier)
    }

    /// Aliases in module-name order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let aliases: &'a ExternalAliases = self.aliases;
        aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Aliases whose global name is not a plain identifier path
    ///
    /// Such names are accepted, but a browser will not find them on `window`.
    pub fn suspicious_globals(&self) -> Vec<(&'a str, &'a str)> {
        self.iter()
            .filter(|(_, global)| !looks_like_global(global))
            .collect()
    }
}

/// Check if a name can be read as a global at runtime
pub fn looks_like_global(name: &str) -> bool {
    GLOBAL_NAME_REGEX.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react_aliases() -> ExternalAliases {
        let mut aliases = ExternalAliases::new();
        aliases.insert("react".to_string(), "React".to_string());
        aliases.insert("react-dom".to_string(), "ReactDOM".to_string());
        aliases
    }

    #[test]
    fn test_global_for() {
        let aliases = react_aliases();
        let externals = Externals::new(&aliases);

        assert_eq!(externals.global_for("react"), Some("React"));
        assert_eq!(externals.global_for("react-dom"), Some("ReactDOM"));
        assert_eq!(externals.global_for("react-dom/server"), None);
        assert_eq!(externals.global_for("./react"), None);
        assert!(externals.is_external("react"));
        assert!(!externals.is_external("lodash"));
    }

    #[test]
    fn test_iter_is_ordered() {
        let aliases = react_aliases();
        let externals = Externals::new(&aliases);

        let pairs: Vec<_> = externals.iter().collect();
        assert_eq!(pairs, vec![("react", "React"), ("react-dom", "ReactDOM")]);
        assert_eq!(externals.len(), 2);
    }

    #[test]
    fn test_looks_like_global() {
        assert!(looks_like_global("React"));
        assert!(looks_like_global("window.ReactDOM"));
        assert!(looks_like_global("$"));
        assert!(!looks_like_global("react-dom"));
        assert!(!looks_like_global("1React"));
        assert!(!looks_like_global("window."));
    }

    #[test]
    fn test_suspicious_globals() {
        let mut aliases = react_aliases();
        aliases.insert("lodash".to_string(), "lo dash".to_string());
        let externals = Externals::new(&aliases);

        assert_eq!(externals.suspicious_globals(), vec![("lodash", "lo dash")]);
    }
}
