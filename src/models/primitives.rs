//! Primitive types shared by the client and the endpoint services.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// Callback invoked once with the outcome of a request.
///
/// # Example
///
/// ```
/// use gw2api::Continuation;
///
/// let continuation: Continuation = Box::new(|outcome| match outcome {
///     Ok(body) => println!("build: {}", body["id"]),
///     Err(err) => eprintln!("request failed: {}", err),
/// });
/// # drop(continuation);
/// ```
pub type Continuation = Box<dyn FnOnce(Result<Value>) + Send + 'static>;

/// Handler that consumes transport errors in place of the original caller.
pub type ErrorHandler = Arc<dyn Fn(Error) + Send + Sync + 'static>;

/// The execution context a client dispatches requests in.
///
/// # Example
///
/// ```
/// use gw2api::ExecutionContext;
///
/// let ctx = ExecutionContext::default();
/// assert!(ctx.can_block());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    /// The calling thread may block until the response arrives.
    ///
    /// The client owns a single-threaded runtime for this purpose, so calls
    /// must be made outside of any async runtime.
    #[default]
    Blocking,
    /// The calling thread must never block; a continuation is mandatory and
    /// requests are spawned onto the ambient Tokio runtime.
    NonBlocking,
}

impl ExecutionContext {
    /// Returns `true` if calls may block the current thread.
    pub fn can_block(&self) -> bool {
        matches!(self, ExecutionContext::Blocking)
    }
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionContext::Blocking => write!(f, "blocking"),
            ExecutionContext::NonBlocking => write!(f, "non-blocking"),
        }
    }
}

/// API version path segment, e.g. `v2`.
///
/// # Example
///
/// ```
/// use gw2api::ApiVersion;
///
/// let version = ApiVersion::new("v2").expect("valid version");
/// assert_eq!(version.as_str(), "v2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Create a new API version, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is not a `v` followed by digits.
    pub fn new(version: &str) -> Result<Self> {
        let valid = version
            .strip_prefix('v')
            .map(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false);

        if !valid {
            return Err(Error::InvalidArgument(format!(
                "Invalid API version format: {}. Expected v<number>",
                version
            )));
        }

        Ok(ApiVersion(version.to_string()))
    }

    /// Get the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        ApiVersion(crate::client::API_VERSION.to_string())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_valid() {
        assert_eq!(ApiVersion::new("v2").unwrap().as_str(), "v2");
        assert_eq!(ApiVersion::new("v10").unwrap().to_string(), "v10");
        assert_eq!(ApiVersion::default().as_str(), "v2");
    }

    #[test]
    fn test_api_version_invalid() {
        assert!(ApiVersion::new("2").is_err());
        assert!(ApiVersion::new("v").is_err());
        assert!(ApiVersion::new("v2b").is_err());
        assert!(ApiVersion::new("").is_err());
    }

    #[test]
    fn test_execution_context() {
        assert_eq!(ExecutionContext::default(), ExecutionContext::Blocking);
        assert!(!ExecutionContext::NonBlocking.can_block());
        assert_eq!(ExecutionContext::NonBlocking.to_string(), "non-blocking");
    }
}
