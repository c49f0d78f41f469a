//! Query-parameter assembly.
//!
//! Options are translated to wire parameters fresh for every call. The
//! endpoint-specific extras are gated on the endpoint *containing* a marker
//! path, so any variant of that path (e.g. `commerce/exchange/coins`)
//! qualifies.

use secrecy::ExposeSecret;
use std::fmt;
use url::Url;

use super::config::MAX_PAGE_SIZE;
use crate::models::RequestOptions;
use crate::Result;

const EXCHANGE_MARKER: &str = "commerce/exchange";
const RECIPE_SEARCH_MARKER: &str = "recipes/search";

/// Query parameters for one request, in assembly order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    /// Build the parameters for `endpoint` from `options`.
    ///
    /// Absent options, empty strings and zero values of `page_size`,
    /// `quantity`, `input` and `output` produce no parameter. A `page_size`
    /// above [`MAX_PAGE_SIZE`] is dropped rather than clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use gw2api::{QueryParams, RequestOptions};
    ///
    /// let options = RequestOptions::new().with_page(0, 201);
    /// let params = QueryParams::from_options("items", &options);
    /// assert_eq!(params.get("page"), Some("0"));
    /// assert!(!params.contains("page_size"));
    /// ```
    pub fn from_options(endpoint: &str, options: &RequestOptions) -> Self {
        let mut params = Self::default();

        if let Some(ids) = options.ids.as_ref().filter(|ids| !ids.is_empty()) {
            params.push("ids", ids.to_query_value());
        }

        if let Some(index) = options.page_index {
            params.push("page", index.to_string());
        }

        if let Some(size) = options.page_size.filter(|s| (1..=MAX_PAGE_SIZE).contains(s)) {
            params.push("page_size", size.to_string());
        }

        if let Some(key) = options
            .key
            .as_ref()
            .map(|k| k.expose_secret())
            .filter(|k| !k.is_empty())
        {
            params.push("access_token", key.to_string());
        }

        if let Some(language) = options.language.as_deref().filter(|l| !l.is_empty()) {
            params.push("lang", language.to_string());
        }

        if endpoint.contains(EXCHANGE_MARKER) {
            params.push_nonzero("quantity", options.quantity);
        }

        if endpoint.contains(RECIPE_SEARCH_MARKER) {
            params.push_nonzero("input", options.input);
            params.push_nonzero("output", options.output);
        }

        params
    }

    fn push(&mut self, name: &'static str, value: String) {
        self.0.push((name, value));
    }

    fn push_nonzero(&mut self, name: &'static str, value: Option<u64>) {
        if let Some(v) = value.filter(|v| *v != 0) {
            self.push(name, v.to_string());
        }
    }

    /// Get the value of a parameter by wire name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if a parameter with this wire name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(wire name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, String)> {
        self.0.iter()
    }

    pub(crate) fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(name, value)| {
                let shown = if *name == "access_token" {
                    "[REDACTED]"
                } else {
                    value.as_str()
                };
                (*name, shown)
            }))
            .finish()
    }
}

/// A fully assembled request that has not been sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    url: String,
    query: QueryParams,
}

impl PreparedRequest {
    /// Assemble `base_url/api_version/endpoint` and its parameters.
    pub(crate) fn new(
        base_url: &str,
        api_version: &str,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Self {
        Self {
            url: format!("{}/{}/{}", base_url, api_version, endpoint),
            query: QueryParams::from_options(endpoint, options),
        }
    }

    /// The request URL without a query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The query parameters.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// The request URL including the encoded query string.
    ///
    /// No `?` is appended when there are no parameters.
    pub fn full_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}
