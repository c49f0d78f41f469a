//! HTTP client and request dispatch for the Guild Wars 2 API.
//!
//! This module provides the main entry point [`Gw2Client`].
//!
//! # Example
//!
//! ```no_run
//! use gw2api::{ClientConfig, Gw2Client, RequestOptions};
//!
//! # async fn example() -> gw2api::Result<()> {
//! let client = Gw2Client::with_config(ClientConfig::non_blocking())?;
//!
//! let (tx, rx) = tokio::sync::oneshot::channel();
//! client.call(
//!     "items",
//!     Some(RequestOptions::new().with_ids(vec![24, 68])),
//!     Some(Box::new(move |outcome| {
//!         let _ = tx.send(outcome);
//!     })),
//! )?;
//!
//! let items = rx.await.expect("continuation dropped")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod query;

pub use config::{ClientConfig, API_VERSION, BASE_URL, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use http::Gw2Client;
pub use query::{PreparedRequest, QueryParams};
pub(crate) use http::ClientInner;
