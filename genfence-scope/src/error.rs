use thiserror::Error;

/// Errors produced when compiling a scope specification.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("invalid name pattern '{pattern}'")]
    Name {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid path pattern '{pattern}'")]
    Path {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("failed to build path matcher")]
    Build {
        #[source]
        source: ignore::Error,
    },
}
