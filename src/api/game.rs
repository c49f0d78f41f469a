//! Static game data service.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::Result;

/// Service for endpoints that describe the game itself.
///
/// None of these require an API key. Most of them are bulk endpoints that
/// accept `ids`, paging and `language` options.
///
/// # Example
///
/// ```no_run
/// # fn example(client: gw2api::Gw2Client) -> gw2api::Result<()> {
/// use gw2api::RequestOptions;
///
/// let build = client.game().build(None, None)?;
///
/// let items = client.game().items(
///     Some(RequestOptions::new().with_ids(vec![24, 68]).with_language("de")),
///     None,
/// )?;
/// # Ok(())
/// # }
/// ```
pub struct GameService {
    inner: Arc<ClientInner>,
}

impl GameService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current game build (`build`).
    pub fn build(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("build", options, continuation)
    }

    /// Get dye colors (`colors`).
    pub fn colors(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("colors", options, continuation)
    }

    /// Get continents (`continents`).
    pub fn continents(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("continents", options, continuation)
    }

    /// Get wallet currencies (`currencies`).
    pub fn currencies(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("currencies", options, continuation)
    }

    /// Get dynamic events (`events`).
    pub fn events(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("events", options, continuation)
    }

    /// Get the state of dynamic events (`events-state`).
    pub fn events_state(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("events-state", options, continuation)
    }

    /// Get commonly requested in-game assets (`files`).
    pub fn files(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("files", options, continuation)
    }

    /// Get items (`items`).
    pub fn items(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("items", options, continuation)
    }

    /// Get leaderboards (`leaderboards`).
    pub fn leaderboards(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("leaderboards", options, continuation)
    }

    /// Get maps (`maps`).
    pub fn maps(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("maps", options, continuation)
    }

    /// Get material storage categories (`materials`).
    pub fn materials(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("materials", options, continuation)
    }

    /// Get quaggan images (`quaggans`).
    pub fn quaggans(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("quaggans", options, continuation)
    }

    /// Get item skins (`skins`).
    pub fn skins(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("skins", options, continuation)
    }

    /// Get skills (`skills`).
    pub fn skills(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("skills", options, continuation)
    }

    /// Get profession specializations (`specializations`).
    pub fn specializations(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("specializations", options, continuation)
    }

    /// Get traits (`traits`).
    pub fn traits(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("traits", options, continuation)
    }

    /// Get traits in their beta state (`traits-beta`).
    pub fn traits_beta(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("traits-beta", options, continuation)
    }

    /// Get world servers (`worlds`).
    pub fn worlds(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("worlds", options, continuation)
    }
}
