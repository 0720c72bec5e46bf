//! Compiled scope matchers.

use std::path::{Component, Path};

use ignore::overrides::{Override, OverrideBuilder};
use regex::Regex;

use crate::{ScopeError, ScopeSpec};

/// Classifies paths relative to a root as in or out of a declared scope.
///
/// This is the contract consumed by snapshot/diff engines: after a generator
/// runs, every changed path is classified, and changes outside the generator's
/// scope are surfaced rather than silently ignored. Implementations must be
/// pure: no filesystem access, same answer on repeated calls.
pub trait Matcher {
    /// Whether `path`, relative to the scope's root, is inside the scope.
    fn is_match(&self, path: &Path) -> bool;
}

/// A compiled [`ScopeSpec`].
///
/// Name patterns are matched against each path component, so a matching
/// directory name covers its whole subtree. Path patterns are anchored at the
/// root and a matching directory path also covers its subtree.
#[derive(Debug)]
pub struct Scope {
    names: Vec<Regex>,
    paths: Override,
    exclude: Option<Box<Scope>>,
}

impl Scope {
    pub(crate) fn new(spec: &ScopeSpec) -> Result<Self, ScopeError> {
        let mut names = Vec::with_capacity(spec.names.len());
        for pattern in &spec.names {
            let anchored = format!("^(?:{pattern})$");
            let regex = Regex::new(&anchored).map_err(|source| ScopeError::Name {
                pattern: pattern.clone(),
                source,
            })?;
            names.push(regex);
        }

        let mut builder = OverrideBuilder::new("");
        for pattern in &spec.paths {
            // Anchor at the root and include the subtree under a matched
            // directory.
            for glob in [format!("/{pattern}"), format!("/{pattern}/**")] {
                builder.add(&glob).map_err(|source| ScopeError::Path {
                    pattern: pattern.clone(),
                    source,
                })?;
            }
        }
        let paths = builder
            .build()
            .map_err(|source| ScopeError::Build { source })?;

        let exclude = match &spec.exclude {
            Some(inner) => Some(Box::new(Scope::new(inner)?)),
            None => None,
        };

        Ok(Self {
            names,
            paths,
            exclude,
        })
    }

    fn included(&self, path: &Path) -> bool {
        if self.paths.matched(path, false).is_whitelist()
            || self.paths.matched(path, true).is_whitelist()
        {
            return true;
        }

        path.components().any(|component| match component {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|name| self.names.iter().any(|re| re.is_match(name))),
            _ => false,
        })
    }
}

impl Matcher for Scope {
    fn is_match(&self, path: &Path) -> bool {
        if !self.included(path) {
            return false;
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(path),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(spec: ScopeSpec) -> Scope {
        spec.compile().expect("spec should compile")
    }

    #[test]
    fn test_empty_scope_matches_nothing() {
        let scope = scope(ScopeSpec::default());
        assert!(!scope.is_match(Path::new("gen/out.go")));
        assert!(!scope.is_match(Path::new("main.rs")));
    }

    #[test]
    fn test_directory_path_covers_subtree() {
        let scope = scope(ScopeSpec {
            paths: vec!["gen".to_string()],
            ..ScopeSpec::default()
        });
        assert!(scope.is_match(Path::new("gen")));
        assert!(scope.is_match(Path::new("gen/out.go")));
        assert!(scope.is_match(Path::new("gen/nested/deep.go")));
        assert!(!scope.is_match(Path::new("other/out.go")));
        assert!(!scope.is_match(Path::new("genx/out.go")));
    }

    #[test]
    fn test_path_glob_is_root_anchored() {
        let scope = scope(ScopeSpec {
            paths: vec!["*.pb.go".to_string()],
            ..ScopeSpec::default()
        });
        assert!(scope.is_match(Path::new("service.pb.go")));
        assert!(!scope.is_match(Path::new("nested/service.pb.go")));
    }

    #[test]
    fn test_name_pattern_matches_any_component() {
        let scope = scope(ScopeSpec {
            names: vec!["node_modules".to_string(), "generated_.*".to_string()],
            ..ScopeSpec::default()
        });
        assert!(scope.is_match(Path::new("web/node_modules/lodash/index.js")));
        assert!(scope.is_match(Path::new("src/generated_client.rs")));
        assert!(!scope.is_match(Path::new("src/client.rs")));
    }

    #[test]
    fn test_name_pattern_is_anchored() {
        let scope = scope(ScopeSpec {
            names: vec!["gen".to_string()],
            ..ScopeSpec::default()
        });
        assert!(scope.is_match(Path::new("gen/out.go")));
        assert!(!scope.is_match(Path::new("genfence/out.go")));
    }

    #[test]
    fn test_exclude_wins_over_inclusion() {
        let scope = scope(ScopeSpec {
            paths: vec!["gen".to_string()],
            exclude: Some(Box::new(ScopeSpec {
                paths: vec!["gen/vendor".to_string()],
                ..ScopeSpec::default()
            })),
            ..ScopeSpec::default()
        });
        assert!(scope.is_match(Path::new("gen/out.go")));
        assert!(!scope.is_match(Path::new("gen/vendor/lib.go")));
        assert!(!scope.is_match(Path::new("gen/vendor")));
    }

    #[test]
    fn test_invalid_name_pattern() {
        let err = ScopeSpec {
            names: vec!["(unclosed".to_string()],
            ..ScopeSpec::default()
        }
        .compile()
        .unwrap_err();
        assert!(matches!(err, ScopeError::Name { pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_invalid_path_pattern() {
        let err = ScopeSpec {
            paths: vec!["gen/[".to_string()],
            ..ScopeSpec::default()
        }
        .compile()
        .unwrap_err();
        assert!(matches!(err, ScopeError::Path { pattern, .. } if pattern == "gen/["));
    }
}
