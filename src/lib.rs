//! # gw2api-rs
//!
//! A Rust client for the official Guild Wars 2 v2 API.
//!
//! Every endpoint is reached through a single dispatch routine that builds
//! the query string from [`RequestOptions`], performs one HTTP GET, and
//! either returns the JSON body or hands it to a continuation.
//!
//! ## Features
//!
//! - **Two execution contexts**: block the calling thread, or spawn onto a
//!   Tokio runtime and receive the outcome in a continuation
//! - **Error interception**: an optional per-client handler consumes
//!   transport errors in place of the caller
//! - **Endpoint services**: account, characters, commerce, game data, guild,
//!   PvP, recipes and WvW
//! - **Untyped bodies**: responses are returned as `serde_json::Value`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gw2api::{Gw2Client, RequestOptions};
//!
//! fn main() -> gw2api::Result<()> {
//!     let client = Gw2Client::new()?;
//!
//!     let build = client.game().build(None, None)?;
//!     println!("Current build: {:?}", build);
//!
//!     let options = RequestOptions::new().with_key("your-api-key");
//!     if let Some(wallet) = client.account().wallet(Some(options), None)? {
//!         println!("Wallet: {}", wallet);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Non-blocking Example
//!
//! ```rust,no_run
//! use gw2api::{Gw2Client, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> gw2api::Result<()> {
//!     let client = Gw2Client::non_blocking()?;
//!
//!     let (tx, rx) = tokio::sync::oneshot::channel();
//!     client.game().items(
//!         Some(RequestOptions::new().with_ids(vec![24, 68])),
//!         Some(Box::new(move |outcome| {
//!             let _ = tx.send(outcome);
//!         })),
//!     )?;
//!
//!     let items = rx.await.expect("continuation dropped")?;
//!     println!("{}", items);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Interception
//!
//! ```rust,no_run
//! use gw2api::{ClientConfig, Gw2Client};
//!
//! # fn example() -> gw2api::Result<()> {
//! let client = Gw2Client::with_config(
//!     ClientConfig::blocking().with_error_handler(|err| {
//!         tracing::error!(error = %err, "gw2 api request failed");
//!     }),
//! )?;
//!
//! // A failed request now returns Ok(None) after the handler has run.
//! let build = client.call("build", None, None)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{
    ApiVersion, Continuation, ErrorHandler, ExchangeType, ExecutionContext, Ids,
    RequestOptions, TransactionKind, TransactionScope,
};
pub use client::{
    ClientConfig, Gw2Client, PreparedRequest, QueryParams, API_VERSION, BASE_URL,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use gw2api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ApiVersion, Continuation, ErrorHandler, ExchangeType, ExecutionContext, Ids,
        RequestOptions, TransactionKind, TransactionScope,
    };
    pub use crate::client::{ClientConfig, Gw2Client, MAX_PAGE_SIZE};
}
