//! Trading post and gem exchange service.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{
    Continuation, ExchangeType, RequestOptions, TransactionKind, TransactionScope,
};
use crate::{Error, Result};

/// Service for the `commerce` endpoints.
///
/// # Example
///
/// ```no_run
/// # fn example(client: gw2api::Gw2Client) -> gw2api::Result<()> {
/// use gw2api::{ExchangeType, RequestOptions, TransactionKind, TransactionScope};
///
/// // How many gems do 100 coins buy?
/// let quote = client.commerce().exchange(ExchangeType::Coins, 100, None, None)?;
///
/// // Open sell orders of the account
/// let sells = client.commerce().transactions(
///     TransactionScope::Current,
///     TransactionKind::Sells,
///     Some(RequestOptions::new().with_key("your-api-key")),
///     None,
/// )?;
/// # Ok(())
/// # }
/// ```
pub struct CommerceService {
    inner: Arc<ClientInner>,
}

impl CommerceService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current gem exchange rate (`commerce/exchange/{type}`).
    ///
    /// `quantity` is the amount of coins or gems to exchange and is sent as
    /// the `quantity` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `quantity` is zero.
    pub fn exchange(
        &self,
        exchange_type: ExchangeType,
        quantity: u64,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        if quantity == 0 {
            return Err(Error::InvalidArgument(
                "commerce/exchange requires a quantity".to_string(),
            ));
        }

        let options = options.unwrap_or_default().with_quantity(quantity);
        self.inner.call(
            &format!("commerce/exchange/{}", exchange_type),
            Some(options),
            continuation,
        )
    }

    /// Get the buy and sell listings of items (`commerce/listings`).
    pub fn listings(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("commerce/listings", options, continuation)
    }

    /// Get the best buy and sell prices of items (`commerce/prices`).
    ///
    /// Earlier wrappers of this API sent this request to `commerce/listings`
    /// by mistake; this method queries the prices endpoint.
    pub fn prices(
        &self,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call("commerce/prices", options, continuation)
    }

    /// Get the trading post transactions of the account
    /// (`commerce/transactions/{scope}/{kind}`).
    pub fn transactions(
        &self,
        scope: TransactionScope,
        kind: TransactionKind,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call(
            &format!("commerce/transactions/{}/{}", scope, kind),
            options,
            continuation,
        )
    }
}
