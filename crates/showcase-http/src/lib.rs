//! Shared HTTP client for the Showcase API
//!
//! Produces pre-configured request handles bound to a fixed service origin,
//! so application code never repeats origin, header, or credential settings
//! at call sites.
//!
//! ## Features
//!
//! - **Fixed base origin**: relative paths resolve against one configured URL
//! - **Default headers**: applied to every request, overridable per call
//! - **Credential forwarding**: automatic session-cookie replay via a cookie store
//! - **Explicit construction**: built once at startup and injected, no globals

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ConfigError, Result};

/// Re-export commonly used types
pub use reqwest::{header, Method, RequestBuilder, Response, StatusCode};
