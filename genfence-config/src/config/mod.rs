//! Configuration model for generator registries.

mod parse;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use genfence_scope::ScopeSpec;
pub use parse::{InlinePolicy, from_strings, from_strings_with, load, load_with};
use serde::{Deserialize, Serialize, Serializer};

use crate::{Error, Result};

/// Root configuration document.
///
/// Immutable after loading: no entry is added, removed, or mutated for the
/// duration of a build, so a `Config` may be freely shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Map from generator name to its configuration.
    #[serde(default, skip_serializing_if = "Generators::is_empty")]
    pub generators: Generators,
}

impl Config {
    /// Encode the configuration as canonical YAML (generators sorted by name).
    ///
    /// Decoding the result yields an equal configuration.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| Box::new(Error::Serialize { source }))
    }
}

/// Name-keyed collection of generator configurations.
///
/// Names are unique by construction (map keys). All enumeration that affects
/// output or execution order goes through [`Generators::sorted_names`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Generators(HashMap<String, GeneratorConfig>);

impl Generators {
    /// All generator names in ascending lexicographic order.
    ///
    /// Pure and repeatable: the same registry always yields the same sequence,
    /// regardless of the order entries appeared in the source document.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        names
    }

    /// Look up a generator by name.
    pub fn get(&self, name: &str) -> Result<&GeneratorConfig> {
        self.0
            .get(name)
            .ok_or_else(|| Box::new(Error::UnknownGenerator { name: name.to_string() }))
    }

    /// Whether a generator with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, config: GeneratorConfig) {
        self.0.insert(name, config);
    }

    pub(crate) fn into_entries(self) -> HashMap<String, GeneratorConfig> {
        self.0
    }
}

impl Serialize for Generators {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // Canonical output: sorted by name.
        let sorted: BTreeMap<&String, &GeneratorConfig> = self.0.iter().collect();
        sorted.serialize(serializer)
    }
}

impl FromIterator<(String, GeneratorConfig)> for Generators {
    fn from_iter<I: IntoIterator<Item = (String, GeneratorConfig)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Configuration for a single generator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Directory, relative to the build root, in which the generation command
    /// runs. Must exist at execution time; not validated at load time.
    #[serde(default, rename = "working-dir", skip_serializing_if = "is_empty_path")]
    pub working_dir: PathBuf,

    /// The files and directories this generator is allowed to produce or
    /// modify. Changes outside this scope after a run are a build-integrity
    /// signal.
    #[serde(default, rename = "output-scope", skip_serializing_if = "ScopeSpec::is_empty")]
    pub output_scope: ScopeSpec,

    /// Environment variables set for the generator invocation. Values are
    /// opaque strings, no interpolation.
    ///
    /// ```yaml
    /// environment:
    ///   GOOS: darwin
    ///   GOARCH: amd64
    /// ```
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Join the working directory onto the build root. Pure; existence is the
    /// caller's concern at execution time.
    pub fn resolved_working_dir(&self, build_root: &Path) -> PathBuf {
        build_root.join(&self.working_dir)
    }

    /// Overlay the declared environment on top of `base`. Declared variables
    /// override base entries of the same name.
    pub fn merged_environment<I, K, V>(&self, base: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env: BTreeMap<String, String> = base
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        env.extend(
            self.environment
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        env
    }
}

fn is_empty_path(path: &PathBuf) -> bool {
    path.as_os_str().is_empty()
}
