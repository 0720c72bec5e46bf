//! Configuration loading from files and strings.

use std::path::Path;

use crate::{Config, Error, Result};

/// Filename used in diagnostics when configuration comes from a string.
const DEFAULT_FILENAME: &str = "genfence.yml";

/// How inline content combines with file-backed content.
///
/// The two-source loader has historically been ambiguous about what the second
/// argument means; the policy makes the choice explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InlinePolicy {
    /// Inline content is discarded; only the file-backed source is decoded.
    Ignore,
    /// Inline entries replace file-backed entries with the same generator name.
    #[default]
    Override,
}

/// Load configuration from an optional file plus inline content.
///
/// The file, when given, is read exactly once; a missing or unreadable file is
/// [`Error::Read`], malformed YAML is [`Error::Parse`]. Inline entries override
/// file entries with the same name. Both sources empty yields an empty
/// registry.
pub fn load(path: Option<&Path>, inline: &str) -> Result<Config> {
    load_with(path, inline, InlinePolicy::default())
}

/// [`load`] with an explicit inline policy.
pub fn load_with(path: Option<&Path>, inline: &str, policy: InlinePolicy) -> Result<Config> {
    let (content, filename) = match path {
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|source| Error::read(path, source))?;
            (content, path.display().to_string())
        }
        None => (String::new(), DEFAULT_FILENAME.to_string()),
    };
    from_sources(&content, &filename, inline, policy)
}

/// Load configuration from two in-memory sources.
///
/// Each non-empty source is parsed independently; a failure in either returns
/// the error with no partial registry. Secondary entries override primary
/// entries with the same name.
pub fn from_strings(primary: &str, secondary: &str) -> Result<Config> {
    from_strings_with(primary, secondary, InlinePolicy::default())
}

/// [`from_strings`] with an explicit inline policy.
pub fn from_strings_with(primary: &str, secondary: &str, policy: InlinePolicy) -> Result<Config> {
    from_sources(primary, DEFAULT_FILENAME, secondary, policy)
}

fn from_sources(
    primary: &str,
    primary_name: &str,
    secondary: &str,
    policy: InlinePolicy,
) -> Result<Config> {
    let mut config = parse_document(primary, primary_name)?;

    match policy {
        InlinePolicy::Ignore => {}
        InlinePolicy::Override => {
            let overrides = parse_document(secondary, "<inline>")?;
            for (name, generator) in overrides.generators.into_entries() {
                config.generators.insert(name, generator);
            }
        }
    }

    validate_scopes(&config)?;
    Ok(config)
}

/// Decode one YAML document. Empty content is an empty registry; unknown keys
/// are ignored for forward compatibility.
fn parse_document(content: &str, filename: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content).map_err(|e| Error::parse(e, content, filename))
}

/// Compile every declared output scope so malformed patterns are reported as
/// configuration errors rather than failures mid-build.
fn validate_scopes(config: &Config) -> Result<()> {
    for name in config.generators.sorted_names() {
        let generator = config.generators.get(&name)?;
        generator
            .output_scope
            .compile()
            .map_err(|source| Box::new(Error::Scope {
                generator: name.clone(),
                source,
            }))?;
    }
    Ok(())
}
