//! API service modules for Guild Wars 2 endpoints.
//!
//! Each service groups the endpoints of one area of the API. Every method
//! composes its path, forwards the caller's options and continuation to the
//! client unchanged, and returns whatever the client returns.

mod account;
mod characters;
mod commerce;
mod game;
mod guild;
mod pvp;
mod recipes;
mod wvw;

pub use account::AccountService;
pub use characters::CharactersService;
pub use commerce::CommerceService;
pub use game::GameService;
pub use guild::GuildService;
pub use pvp::PvpService;
pub use recipes::RecipesService;
pub use wvw::WvwService;

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::Result;

/// Dispatch to a path that addresses one resource by id.
///
/// The first id in `options.ids` goes into the path; `ids` itself is not
/// forwarded.
pub(crate) fn call_with_id<F>(
    inner: &Arc<ClientInner>,
    path: F,
    options: Option<RequestOptions>,
    continuation: Option<Continuation>,
) -> Result<Option<Value>>
where
    F: FnOnce(&str) -> String,
{
    let mut options = options.unwrap_or_default();
    let id = options.take_first_id()?;
    inner.call(&path(&id), Some(options), continuation)
}
