//! Characters service.

use serde_json::Value;
use std::sync::Arc;

use super::call_with_id;
use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::Result;

/// Service for the characters of an account.
///
/// The per-character endpoints address one character by name, taken from
/// the first entry of `options.ids`. Further ids are ignored.
///
/// # Example
///
/// ```no_run
/// # fn example(client: gw2api::Gw2Client) -> gw2api::Result<()> {
/// use gw2api::RequestOptions;
///
/// let options = RequestOptions::new()
///     .with_key("your-api-key")
///     .with_ids("Eir Stegalkin");
///
/// let inventory = client.characters().inventory(Some(options), None)?;
/// # Ok(())
/// # }
/// ```
pub struct CharactersService {
    inner: Arc<ClientInner>,
}

impl CharactersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List characters, or get the characters named in `options.ids`.
    pub fn list(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("characters", options, continuation)
    }

    /// Get the inventory of one character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if
    /// `options.ids` holds no character name.
    pub fn inventory(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        call_with_id(
            &self.inner,
            |name| format!("characters/{}/inventory", name),
            options,
            continuation,
        )
    }

    /// Get the equipment of one character.
    pub fn equipment(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        call_with_id(
            &self.inner,
            |name| format!("characters/{}/equipment", name),
            options,
            continuation,
        )
    }

    /// Get the recipes unlocked by one character.
    pub fn recipes(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        call_with_id(
            &self.inner,
            |name| format!("characters/{}/recipes", name),
            options,
            continuation,
        )
    }

    /// Get the selected specializations of one character.
    pub fn specializations(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        call_with_id(
            &self.inner,
            |name| format!("characters/{}/specializations", name),
            options,
            continuation,
        )
    }
}
