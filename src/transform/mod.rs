//! Transform rule matching
//!
//! Compiles `transform_rules` and picks the handler a bundler should run on
//! a given module.

use regex::Regex;
use tracing::debug;

use crate::config::{ConfigError, TransformRule};
use crate::utils::normalize_module_path;

/// A rule with its pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pattern: Regex,
    handler_name: String,
}

impl CompiledRule {
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }
}

/// Ordered set of compiled transform rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compile every rule, failing on the first invalid pattern
    pub fn compile(rules: &[TransformRule]) -> Result<Self, ConfigError> {
        let rules = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                let pattern = Regex::new(&rule.match_pattern).map_err(|source| {
                    ConfigError::InvalidPattern {
                        index,
                        pattern: rule.match_pattern.clone(),
                        source,
                    }
                })?;
                Ok(CompiledRule {
                    pattern,
                    handler_name: rule.handler_name.clone(),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { rules })
    }

    /// Handler of the first rule matching `path`
    ///
    /// Rules are tried in declaration order; a later, more specific rule never
    /// overrides an earlier match.
    pub fn handler_for(&self, path: &str) -> Option<&str> {
        let path = normalize_module_path(path);
        let handler = self
            .rules
            .iter()
            .find(|rule| rule.pattern.is_match(&path))
            .map(|rule| rule.handler_name.as_str());

        debug!("Handler for {}: {:?}", path, handler);
        handler
    }

    /// Indices of every rule matching `path`, in declaration order
    pub fn matching(&self, path: &str) -> Vec<usize> {
        let path = normalize_module_path(path);
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.pattern.is_match(&path))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fable_rules() -> RuleSet {
        RuleSet::compile(&[TransformRule::new(r"\.fs(x|proj)?$", "fable-loader")]).unwrap()
    }

    #[test]
    fn test_fable_pattern() {
        let rules = fable_rules();

        assert_eq!(rules.handler_for("./src/React.TodoMVC.fsproj"), Some("fable-loader"));
        assert_eq!(rules.handler_for("src/App.fs"), Some("fable-loader"));
        assert_eq!(rules.handler_for("src/View.fsx"), Some("fable-loader"));
        assert_eq!(rules.handler_for("src/main.js"), None);
        assert_eq!(rules.handler_for("src/App.fsi"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let rules = RuleSet::compile(&[
            TransformRule::new(r"\.jsx?$", "babel-loader"),
            TransformRule::new(r"components/.*\.jsx$", "component-loader"),
        ])
        .unwrap();

        assert_eq!(rules.handler_for("src/components/Button.jsx"), Some("babel-loader"));
        assert_eq!(rules.matching("src/components/Button.jsx"), vec![0, 1]);
        assert_eq!(rules.matching("src/index.js"), vec![0]);
    }

    #[test]
    fn test_windows_separators_are_normalized() {
        let rules = RuleSet::compile(&[TransformRule::new(r"^src/.*\.css$", "css-loader")]).unwrap();
        assert_eq!(rules.handler_for(r"src\styles\app.css"), Some("css-loader"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RuleSet::compile(&[
            TransformRule::new(r"\.js$", "babel-loader"),
            TransformRule::new("[", "broken-loader"),
        ])
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPattern { index: 1, .. }));
    }

    #[test]
    fn test_look_around_is_rejected() {
        let err = RuleSet::compile(&[TransformRule::new(r"node_modules\/(?!foo)", "babel-loader")])
            .unwrap_err();

        match err {
            ConfigError::InvalidPattern { index, pattern, .. } => {
                assert_eq!(index, 0);
                assert_eq!(pattern, r"node_modules\/(?!foo)");
            }
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_rule_set() {
        let rules = RuleSet::compile(&[]).unwrap();
        assert!(rules.is_empty());
        assert_eq!(rules.handler_for("src/main.js"), None);
    }
}
