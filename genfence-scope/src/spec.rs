//! Declarative scope specifications.

use serde::{Deserialize, Serialize};

use crate::{Scope, ScopeError};

/// Declarative specification of a generator's output scope.
///
/// A path relative to the build root is in scope when any `names` pattern
/// matches one of its components, or any `paths` pattern matches the path or
/// one of its ancestors, and it is not matched by `exclude`. A matched
/// directory puts its whole subtree in scope. The empty specification matches
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScopeSpec {
    /// Anchored regular expressions matched against individual path components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,

    /// Glob patterns matched against the path relative to the build root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,

    /// Entries matched here are subtracted from the scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Box<ScopeSpec>>,
}

impl ScopeSpec {
    /// Whether the specification declares no rules at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.paths.is_empty() && self.exclude.is_none()
    }

    /// Total number of rules, exclusions included.
    pub fn rule_count(&self) -> usize {
        self.names.len()
            + self.paths.len()
            + self.exclude.as_ref().map_or(0, |e| e.rule_count())
    }

    /// Compile the specification into a matcher.
    pub fn compile(&self) -> Result<Scope, ScopeError> {
        Scope::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec() {
        let spec = ScopeSpec::default();
        assert!(spec.is_empty());
        assert_eq!(spec.rule_count(), 0);
    }

    #[test]
    fn test_rule_count_includes_exclusions() {
        let spec = ScopeSpec {
            names: vec!["generated_.*".to_string()],
            paths: vec!["gen".to_string(), "out".to_string()],
            exclude: Some(Box::new(ScopeSpec {
                paths: vec!["gen/vendor".to_string()],
                ..ScopeSpec::default()
            })),
        };
        assert!(!spec.is_empty());
        assert_eq!(spec.rule_count(), 4);
    }
}
