//! Client configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for a shared API client.
///
/// Holds everything call sites would otherwise repeat on every request: the
/// service origin, the headers applied by default, and whether session
/// cookies are forwarded automatically. Immutable once a client is built
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Absolute URL every request path resolves against.
    ///
    /// May carry a path prefix (e.g. `https://api.example.com/api/v1`);
    /// trailing slashes are trimmed when the client is built.
    pub base_origin: String,

    /// Attach stored session cookies to every request to the origin.
    #[serde(default)]
    pub forward_credentials: bool,

    /// Headers applied to every request unless the call sets them itself.
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Create a configuration for the given origin with no defaults.
    pub fn new(base_origin: impl Into<String>) -> Self {
        Self {
            base_origin: base_origin.into(),
            forward_credentials: false,
            default_headers: BTreeMap::new(),
        }
    }

    /// Create a configuration for a JSON API: every request carries
    /// `content-type: application/json` unless the call overrides it.
    pub fn json_api(base_origin: impl Into<String>) -> Self {
        Self::new(base_origin).with_default_header("content-type", "application/json")
    }

    /// Set whether session cookies are forwarded automatically.
    pub fn with_forward_credentials(mut self, forward: bool) -> Self {
        self.forward_credentials = forward;
        self
    }

    /// Add a single default header.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Replace the default header map.
    pub fn with_default_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.default_headers = headers;
        self
    }
}
