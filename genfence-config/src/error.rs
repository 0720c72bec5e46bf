use std::path::PathBuf;

use genfence_scope::ScopeError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(genfence::config_read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse generator configuration")]
    #[diagnostic(code(genfence::config_parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid output scope for generator '{generator}'")]
    #[diagnostic(code(genfence::invalid_scope))]
    Scope {
        generator: String,
        #[source]
        source: ScopeError,
    },

    #[error("no generator named '{name}'")]
    #[diagnostic(help("run 'genfence list' to see the configured generators"))]
    UnknownGenerator { name: String },

    #[error("failed to serialize generator configuration")]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// Create a read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Read {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a serde_yaml error with source context.
    pub fn parse(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from(loc.index()..loc.index() + 1));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
