//! Recipes service.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Continuation, RequestOptions};
use crate::{Error, Result};

/// Service for crafting recipes.
///
/// # Example
///
/// ```no_run
/// # fn example(client: gw2api::Gw2Client) -> gw2api::Result<()> {
/// // Recipes that use Mithril Ore as an ingredient
/// let ids = client.recipes().search(Some(19700), None, None, None)?;
/// # Ok(())
/// # }
/// ```
pub struct RecipesService {
    inner: Arc<ClientInner>,
}

impl RecipesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get recipes (`recipes`).
    pub fn list(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("recipes", options, continuation)
    }

    /// Search recipe ids by ingredient or by result (`recipes/search`).
    ///
    /// Exactly one of `input` (ingredient item id) and `output` (crafted
    /// item id) must be given, either as an argument or already set in
    /// `options`. An argument takes precedence over the matching option. An
    /// id of zero counts as not given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if both or neither are set.
    pub fn search(
        &self,
        input: Option<u64>,
        output: Option<u64>,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        let mut options = options.unwrap_or_default();
        let input = input.or(options.input.take()).filter(|id| *id != 0);
        let output = output.or(options.output.take()).filter(|id| *id != 0);

        let options = match (input, output) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidArgument(
                    "recipes/search accepts either input or output, not both".to_string(),
                ))
            }
            (Some(input), None) => options.with_input(input),
            (None, Some(output)) => options.with_output(output),
            (None, None) => {
                return Err(Error::InvalidArgument(
                    "recipes/search requires either input or output".to_string(),
                ))
            }
        };

        self.inner.call("recipes/search", Some(options), continuation)
    }
}
