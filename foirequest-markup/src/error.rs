//! Errors raised while setting the helpers up.
//!
//! Rendering itself is total: a description that is not found, an empty
//! footer or identical variants are ordinary outcomes, not errors.

use thiserror::Error;

/// Invalid renderer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid footer separator pattern `{pattern}`: {source}")]
    InvalidSeparator {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("marker start tag template `{template}` has no `{{attrs}}` placeholder")]
    MissingAttrsPlaceholder { template: String },
}

/// Failure to register a template helper.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("template helper `{0}` is already registered")]
    Duplicate(String),
}
