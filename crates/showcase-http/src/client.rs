//! Shared API client handle

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ConfigError, Result};

/// Pre-configured HTTP client bound to a fixed service origin.
///
/// Built once at application startup and passed by reference (or cheaply
/// cloned) to every module that talks to the service. Requests resolve
/// against the configured origin and carry the configured default headers;
/// with credential forwarding enabled, session cookies set by the origin are
/// replayed on subsequent requests automatically.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Client,
    base: Url,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client handle from `config`.
    ///
    /// Validates the configuration and assembles the underlying transport
    /// client. Performs no network I/O.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = parse_origin(&config.base_origin)?;
        let headers = build_header_map(&config.default_headers)?;

        let mut builder = Client::builder().default_headers(headers);
        if config.forward_credentials {
            builder = builder.cookie_store(true);
        }
        let inner = builder.build()?;

        debug!(
            "API client configured for {} (forward_credentials: {})",
            base, config.forward_credentials
        );

        Ok(Self {
            inner,
            base,
            config,
        })
    }

    /// Build a handle wrapped in an [`Arc`] for sharing across the process.
    pub fn shared(config: ClientConfig) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(config)?))
    }

    /// Effective base URL the handle resolves request paths against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Configuration this handle was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get underlying reqwest client (for advanced usage).
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Start a request with an explicit method.
    ///
    /// `path` is joined to the base origin with exactly one `/` between
    /// them, so trailing slashes on the origin and leading slashes on the
    /// path never double up. Headers set on the returned builder override
    /// the configured defaults for that call only. Send-time failures
    /// surface unchanged from `reqwest`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        debug!("HTTP {}: {}", method, url);
        self.inner.request(method, url)
    }

    /// Start a GET request for `path`.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    /// Start a POST request for `path`.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Start a PUT request for `path`.
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    /// Start a PATCH request for `path`.
    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    /// Start a DELETE request for `path`.
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

fn parse_origin(origin: &str) -> Result<Url> {
    let trimmed = origin.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingOrigin);
    }

    let invalid = |reason: String| ConfigError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    };

    let mut url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme `{other}`"))),
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment".to_string()));
    }

    // Normalize the path prefix so joining never duplicates a slash.
    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);

    Ok(url)
}

fn build_header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            }
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        map.insert(header, value);
    }
    Ok(map)
}
