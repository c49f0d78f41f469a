//! World versus World service.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::Result;

/// Service for the `wvw` endpoints.
pub struct WvwService {
    inner: Arc<ClientInner>,
}

impl WvwService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get current matches (`wvw/matches`).
    pub fn matches(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("wvw/matches", options, continuation)
    }

    /// Get objectives (`wvw/objectives`).
    pub fn objectives(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("wvw/objectives", options, continuation)
    }
}
