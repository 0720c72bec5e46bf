//! Output-scope matching for generator change attribution.
//!
//! A generator declares which files and directories it is allowed to produce or
//! modify. A [`ScopeSpec`] captures that declaration as data; compiling it yields
//! a [`Scope`] that classifies paths relative to a build root as in or out of
//! scope. Diff engines consume the [`Matcher`] contract to decide which
//! filesystem deltas are attributable to a generator and which are evidence of a
//! misbehaving or misconfigured one.

mod error;
mod matcher;
mod spec;

pub use error::ScopeError;
pub use matcher::{Matcher, Scope};
pub use spec::ScopeSpec;
