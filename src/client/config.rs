//! Client configuration options and API constants.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::models::{ApiVersion, ErrorHandler, ExecutionContext};
use crate::Error;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Page size the API applies when none is requested.
///
/// Informational only; the client never fills it in.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Base URL of the official API.
pub const BASE_URL: &str = "https://api.guildwars2.com";

/// API version path segment.
pub const API_VERSION: &str = "v2";

/// Configuration for the Guild Wars 2 client.
///
/// # Example
///
/// ```
/// use gw2api::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::non_blocking()
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-app/1.0")
///     .with_error_handler(|err| eprintln!("gw2 api: {}", err));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Scheme and host the API is served from
    pub base_url: String,
    /// API version path segment
    pub api_version: ApiVersion,
    /// How requests are dispatched
    pub execution: ExecutionContext,
    /// Handler that intercepts transport errors
    pub error_handler: Option<ErrorHandler>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("gw2api-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: BASE_URL.to_string(),
            api_version: ApiVersion::default(),
            execution: ExecutionContext::default(),
            error_handler: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for a thread that may block.
    pub fn blocking() -> Self {
        Self::default().with_execution(ExecutionContext::Blocking)
    }

    /// Default configuration for an async task that must not block.
    pub fn non_blocking() -> Self {
        Self::default().with_execution(ExecutionContext::NonBlocking)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Point the client at another host, e.g. a mock server.
    ///
    /// A trailing slash is ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Pin to a specific API version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Set the execution context.
    pub fn with_execution(mut self, execution: ExecutionContext) -> Self {
        self.execution = execution;
        self
    }

    /// Route transport errors to `handler` instead of the caller.
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Error) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("execution", &self.execution)
            .field("error_handler", &self.error_handler.is_some())
            .finish()
    }
}
