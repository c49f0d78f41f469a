//! Per-request options recognized by the dispatcher.

use secrecy::SecretString;
use std::fmt;

use crate::{Error, Result};

/// One or more resource identifiers.
///
/// Identifiers may be numeric (`items`) or alphanumeric (character names,
/// guild GUIDs), so they are carried as strings.
///
/// # Example
///
/// ```
/// use gw2api::Ids;
///
/// assert_eq!(Ids::from(vec![24, 68]).to_query_value(), "24,68");
/// assert_eq!(Ids::from("Eir Stegalkin").to_query_value(), "Eir Stegalkin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ids {
    /// A single identifier, or an already comma-separated list.
    Single(String),
    /// An ordered list of identifiers.
    List(Vec<String>),
}

impl Ids {
    /// The value sent as the `ids` query parameter.
    pub fn to_query_value(&self) -> String {
        match self {
            Ids::Single(id) => id.clone(),
            Ids::List(ids) => ids.join(","),
        }
    }

    /// The first identifier: the first list element, or the scalar itself.
    pub fn first(&self) -> Option<&str> {
        match self {
            Ids::Single(id) => Some(id.as_str()),
            Ids::List(ids) => ids.first().map(String::as_str),
        }
        .filter(|id| !id.is_empty())
    }

    /// Returns `true` if no identifier would reach the wire.
    pub fn is_empty(&self) -> bool {
        match self {
            Ids::Single(id) => id.is_empty(),
            Ids::List(ids) => ids.is_empty(),
        }
    }
}

impl fmt::Display for Ids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_value())
    }
}

impl From<&str> for Ids {
    fn from(s: &str) -> Self {
        Ids::Single(s.to_string())
    }
}

impl From<String> for Ids {
    fn from(s: String) -> Self {
        Ids::Single(s)
    }
}

impl From<u64> for Ids {
    fn from(id: u64) -> Self {
        Ids::Single(id.to_string())
    }
}

impl<T: ToString> From<Vec<T>> for Ids {
    fn from(ids: Vec<T>) -> Self {
        Ids::List(ids.iter().map(ToString::to_string).collect())
    }
}

/// Options for a single request.
///
/// Every field is optional. Endpoint-specific extras (`quantity`, `input`,
/// `output`) are only forwarded to the endpoints that understand them.
///
/// # Example
///
/// ```
/// use gw2api::RequestOptions;
///
/// let options = RequestOptions::new()
///     .with_ids(vec![24, 68])
///     .with_page(0, 50)
///     .with_language("de");
/// assert_eq!(options.page_index, Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Requested identifiers
    pub ids: Option<Ids>,
    /// Page to request on bulk endpoints; zero is the first page
    pub page_index: Option<u32>,
    /// Items per page; values above `MAX_PAGE_SIZE` are not sent
    pub page_size: Option<u32>,
    /// API key for authenticated endpoints
    pub key: Option<SecretString>,
    /// Response language (`en`, `es`, `de`, `fr`, `zh`)
    pub language: Option<String>,
    /// Exchange quantity, `commerce/exchange` only
    pub quantity: Option<u64>,
    /// Ingredient item id, `recipes/search` only
    pub input: Option<u64>,
    /// Result item id, `recipes/search` only
    pub output: Option<u64>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested identifiers.
    pub fn with_ids(mut self, ids: impl Into<Ids>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    /// Set the page index.
    pub fn with_page_index(mut self, index: u32) -> Self {
        self.page_index = Some(index);
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set both the page index and the page size.
    pub fn with_page(self, index: u32, size: u32) -> Self {
        self.with_page_index(index).with_page_size(size)
    }

    /// Set the API key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(SecretString::from(key.into()));
        self
    }

    /// Set the response language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the exchange quantity.
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the recipe search ingredient.
    pub fn with_input(mut self, item_id: u64) -> Self {
        self.input = Some(item_id);
        self
    }

    /// Set the recipe search result.
    pub fn with_output(mut self, item_id: u64) -> Self {
        self.output = Some(item_id);
        self
    }

    /// Remove `ids` and return its first identifier.
    ///
    /// Used by endpoints that address exactly one resource in their path;
    /// any further identifiers are discarded.
    pub(crate) fn take_first_id(&mut self) -> Result<String> {
        self.ids
            .take()
            .and_then(|ids| ids.first().map(str::to_string))
            .ok_or_else(|| {
                Error::InvalidArgument("options.ids must contain at least one id".to_string())
            })
    }
}
