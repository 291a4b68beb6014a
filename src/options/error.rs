use thiserror::Error;

use crate::options::registry::OptionKey;

/// Errors produced while resolving option text.
///
/// Every variant is fatal for the build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// Option name outside the recognized set.
    #[error("unknown option '{key}'")]
    UnknownOption { key: String },

    /// Line is neither `name` nor `name=value`.
    #[error("malformed option '{line}': expected 'name' or 'name=value'")]
    MalformedOption { line: String },

    /// Enum-constrained option unset or set to a value outside its allowed set.
    #[error("--{key} must be either: [{}]", .allowed.join(", "))]
    InvalidEnumOption {
        key: OptionKey,
        allowed: &'static [&'static str],
    },
}

/// An [`OptionError`] tagged with the build environment it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("environment '{environment}': {source}")]
pub struct ResolveError {
    pub environment: String,
    #[source]
    pub source: OptionError,
}
