//! Error types for the Guild Wars 2 API client.
//!
//! Errors fall into two groups. Argument, usage and configuration errors
//! are always returned to the immediate caller. Transport errors (network
//! failures, timeouts, non-2xx responses, undecodable bodies) are the only
//! ones a client-level error handler may intercept.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Guild Wars 2 API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Guild Wars 2 API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was missing or had an invalid value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The client was used in a way its execution context does not allow
    #[error("Usage error: {0}")]
    Usage(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// API returned a non-success status
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error was produced by the network call itself.
    ///
    /// Only transport errors are routed to a registered error handler.
    ///
    /// # Example
    ///
    /// ```
    /// use gw2api::Error;
    ///
    /// assert!(Error::Timeout.is_transport());
    /// assert!(!Error::InvalidArgument("no endpoint".into()).is_transport());
    /// ```
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Timeout | Error::Api { .. } | Error::Json(_)
        )
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, missing key, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidArgument(_) | Error::Usage(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns the HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a response.
    ///
    /// The v2 API reports failures as `{"text": "..."}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("text")
            .and_then(|t| t.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }

    /// Map a transport failure, separating timeouts from other HTTP errors.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }
}
