//! PvP service.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::Result;

/// Service for the PvP endpoints of an account.
pub struct PvpService {
    inner: Arc<ClientInner>,
}

impl PvpService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get win/loss statistics (`pvp/stats`).
    pub fn stats(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("pvp/stats", options, continuation)
    }

    /// Get recently played matches (`pvp/games`).
    pub fn games(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("pvp/games", options, continuation)
    }
}
