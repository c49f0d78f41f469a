//! Account service for endpoints scoped to an API key.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::Result;

/// Service for account-related endpoints.
///
/// All of these endpoints require an API key with the matching permission.
///
/// # Example
///
/// ```no_run
/// # fn example(client: gw2api::Gw2Client) -> gw2api::Result<()> {
/// use gw2api::RequestOptions;
///
/// let options = RequestOptions::new().with_key("your-api-key");
///
/// let wallet = client.account().wallet(Some(options.clone()), None)?;
/// let token = client.account().token_info(Some(options), None)?;
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get general information about the account (`account`).
    pub fn details(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("account", options, continuation)
    }

    /// Get the contents of the account vault (`account/bank`).
    pub fn bank(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("account/bank", options, continuation)
    }

    /// Get the unlocked dyes (`account/dyes`).
    pub fn dyes(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("account/dyes", options, continuation)
    }

    /// Get the material storage (`account/materials`).
    pub fn materials(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("account/materials", options, continuation)
    }

    /// Get the unlocked skins (`account/skins`).
    pub fn skins(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("account/skins", options, continuation)
    }

    /// Get the wallet currencies (`account/wallet`).
    pub fn wallet(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("account/wallet", options, continuation)
    }

    /// Get the name and permissions of the API key itself (`tokeninfo`).
    pub fn token_info(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("tokeninfo", options, continuation)
    }
}
