//! Client construction error types

use thiserror::Error;

/// Result type for client construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building an [`ApiClient`](crate::ApiClient).
///
/// Construction is the only fallible step owned by this crate. Failures of
/// individual requests (connect errors, HTTP error statuses, body decode
/// errors) surface directly from `reqwest` when a request is sent and are
/// never wrapped or classified here.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base origin missing or blank
    #[error("base origin is required")]
    MissingOrigin,

    /// Base origin is not a usable absolute URL
    #[error("invalid base origin `{origin}`: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    /// A default header entry is not a legal HTTP header
    #[error("invalid default header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The underlying transport client failed to build
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
