//! Generator registry and configuration loading.
//!
//! Build configuration declares, per generator, the working directory its
//! command runs in, the environment variables to set for the invocation, and
//! the output scope it is allowed to touch. This crate decodes that YAML into
//! an immutable [`Config`] and exposes deterministic, sorted enumeration so
//! that processing and reporting order is stable across runs.

mod config;
mod error;

pub use config::{
    Config, GeneratorConfig, Generators, InlinePolicy, from_strings, from_strings_with, load,
    load_with,
};
pub use error::{Error, Result};
