//! Guild service.

use serde_json::Value;
use std::sync::Arc;

use super::call_with_id;
use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::Result;

/// Service for the `guild/{id}` endpoints.
///
/// Every method addresses one guild, taken from the first entry of
/// `options.ids`, and fails with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) when there is
/// none. Apart from `details`, these endpoints require the key of a guild
/// leader.
pub struct GuildService {
    inner: Arc<ClientInner>,
}

impl GuildService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn call_guild(
        &self,
        section: Option<&str>,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        call_with_id(
            &self.inner,
            |id| match section {
                Some(section) => format!("guild/{}/{}", id, section),
                None => format!("guild/{}", id),
            },
            options,
            continuation,
        )
    }

    /// Get core details of a guild.
    pub fn details(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.call_guild(None, options, continuation)
    }

    /// Get the guild vault contents.
    pub fn inventory(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.call_guild(Some("inventory"), options, continuation)
    }

    /// Get the guild event log.
    pub fn log(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.call_guild(Some("log"), options, continuation)
    }

    /// Get the guild roster.
    pub fn members(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.call_guild(Some("members"), options, continuation)
    }

    /// Get the guild ranks.
    pub fn ranks(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.call_guild(Some("ranks"), options, continuation)
    }

    /// Get the permissions that can be granted to ranks.
    pub fn permissions(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.call_guild(Some("permissions"), options, continuation)
    }

    /// Get the unlocked guild hall upgrades.
    pub fn upgrades(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.call_guild(Some("upgrades"), options, continuation)
    }
}
