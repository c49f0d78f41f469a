//! HTTP client implementation for the Guild Wars 2 API.

use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::runtime::{Handle, Runtime};

use crate::api::{
    AccountService, CharactersService, CommerceService, GameService, GuildService, PvpService,
    RecipesService, WvwService,
};
use crate::models::{Continuation, ErrorHandler, ExecutionContext, RequestOptions};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::query::PreparedRequest;

/// The main client for interacting with the Guild Wars 2 API.
///
/// Every request goes through [`call`](Self::call), either directly or via
/// one of the endpoint services. How a call behaves depends on the client's
/// [`ExecutionContext`] and on whether a continuation is supplied:
///
/// | Context | Continuation | Behavior |
/// |---|---|---|
/// | `Blocking` | none | blocks, returns `Ok(Some(body))` |
/// | `Blocking` | some | blocks, hands the outcome to the continuation |
/// | `NonBlocking` | none | fails with [`Error::Usage`] |
/// | `NonBlocking` | some | spawns the request, returns immediately |
///
/// When an error handler is configured, transport errors go to it instead
/// of the caller or continuation, and the call yields `Ok(None)`.
///
/// # Example
///
/// ```no_run
/// use gw2api::{Gw2Client, RequestOptions};
///
/// # fn example() -> gw2api::Result<()> {
/// let client = Gw2Client::new()?;
///
/// // Raw endpoint access
/// let build = client.call("build", None, None)?;
///
/// // Through a service
/// let bank = client.account().bank(
///     Some(RequestOptions::new().with_key("your-api-key")),
///     None,
/// )?;
/// # Ok(())
/// # }
/// ```
pub struct Gw2Client {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    error_handler: RwLock<Option<ErrorHandler>>,
    runtime: Option<Runtime>,
}

impl Gw2Client {
    /// Create a client for a thread that may block.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::blocking())
    }

    /// Create a client for async code that must not block.
    pub fn non_blocking() -> Result<Self> {
        Self::with_config(ClientConfig::non_blocking())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not parse, or if the HTTP client or the
    /// runtime of a blocking client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let runtime = match config.execution {
            ExecutionContext::Blocking => Some(
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| Error::Config(format!("failed to build runtime: {}", e)))?,
            ),
            ExecutionContext::NonBlocking => None,
        };

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                error_handler: RwLock::new(config.error_handler.clone()),
                config,
                runtime,
            }),
        })
    }

    /// Send a GET request to `endpoint`.
    ///
    /// `endpoint` is the path below the API version, e.g. `"account/bank"`.
    /// `None` options send no query parameters.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `endpoint` is empty.
    /// - [`Error::Usage`] if a non-blocking client gets no continuation, or
    ///   a client is used from the wrong kind of thread.
    /// - Transport errors, unless an error handler consumes them.
    pub fn call(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        self.inner.call(endpoint, options, continuation)
    }

    /// Assemble the request for `endpoint` without sending it.
    pub fn prepare(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PreparedRequest> {
        self.inner.prepare(endpoint, options)
    }

    /// Replace the error handler. The last registration wins.
    pub fn set_error_handler<F>(&self, handler: F)
    where
        F: Fn(Error) + Send + Sync + 'static,
    {
        self.inner.set_error_handler(Arc::new(handler));
    }

    /// The execution context this client dispatches in.
    pub fn execution(&self) -> ExecutionContext {
        self.inner.config.execution
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the characters service.
    pub fn characters(&self) -> CharactersService {
        CharactersService::new(self.inner.clone())
    }

    /// Get the trading post and gem exchange service.
    pub fn commerce(&self) -> CommerceService {
        CommerceService::new(self.inner.clone())
    }

    /// Get the service for static game data.
    pub fn game(&self) -> GameService {
        GameService::new(self.inner.clone())
    }

    /// Get the guild service.
    pub fn guild(&self) -> GuildService {
        GuildService::new(self.inner.clone())
    }

    /// Get the PvP service.
    pub fn pvp(&self) -> PvpService {
        PvpService::new(self.inner.clone())
    }

    /// Get the recipes service.
    pub fn recipes(&self) -> RecipesService {
        RecipesService::new(self.inner.clone())
    }

    /// Get the World versus World service.
    pub fn wvw(&self) -> WvwService {
        WvwService::new(self.inner.clone())
    }
}

impl ClientInner {
    pub(crate) fn prepare(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PreparedRequest> {
        if endpoint.trim().is_empty() {
            return Err(Error::InvalidArgument("No endpoint set".to_string()));
        }

        let default_options = RequestOptions::default();
        Ok(PreparedRequest::new(
            &self.config.base_url,
            self.config.api_version.as_str(),
            endpoint,
            options.unwrap_or(&default_options),
        ))
    }

    /// Dispatch one request according to the execution context.
    pub(crate) fn call(
        self: &Arc<Self>,
        endpoint: &str,
        options: Option<RequestOptions>,
        continuation: Option<Continuation>,
    ) -> Result<Option<Value>> {
        let request = self.prepare(endpoint, options.as_ref())?;

        tracing::debug!(
            endpoint,
            mode = %self.config.execution,
            params = request.query().len(),
            "dispatching request"
        );

        match (self.config.execution, continuation) {
            (ExecutionContext::Blocking, None) => match self.block_on_fetch(&request)? {
                Ok(body) => Ok(Some(body)),
                Err(err) => self.intercept(err).map(|()| None),
            },
            (ExecutionContext::Blocking, Some(continuation)) => {
                let outcome = self.block_on_fetch(&request)?;
                self.deliver(outcome, continuation);
                Ok(None)
            }
            (ExecutionContext::NonBlocking, None) => Err(Error::Usage(
                "a continuation is required in a non-blocking context".to_string(),
            )),
            (ExecutionContext::NonBlocking, Some(continuation)) => {
                let handle = Handle::try_current().map_err(|_| {
                    Error::Usage(
                        "a non-blocking client must be called from within a Tokio runtime"
                            .to_string(),
                    )
                })?;

                let inner = Arc::clone(self);
                handle.spawn(async move {
                    let outcome = inner.fetch(&request).await;
                    inner.deliver(outcome, continuation);
                });
                Ok(None)
            }
        }
    }

    /// Run the request to completion on the client's own runtime.
    ///
    /// The outer error is a usage error and never reaches the handler; the
    /// inner result is the transport outcome.
    fn block_on_fetch(&self, request: &PreparedRequest) -> Result<Result<Value>> {
        if Handle::try_current().is_ok() {
            return Err(Error::Usage(
                "a blocking client cannot be called from within an async runtime; \
                 use ExecutionContext::NonBlocking"
                    .to_string(),
            ));
        }

        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| Error::Config("blocking client has no runtime".to_string()))?;

        Ok(runtime.block_on(self.fetch(request)))
    }

    /// Perform the GET and decode the body.
    async fn fetch(&self, request: &PreparedRequest) -> Result<Value> {
        let response = self
            .http
            .get(request.url())
            .query(request.query().as_pairs())
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(Error::from_transport)?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let body: Value = response.json().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), url = request.url(), "request failed");
            Err(Error::from_api_response(status.as_u16(), body))
        }
    }

    /// Hand an outcome to the continuation unless the handler takes the error.
    fn deliver(&self, outcome: Result<Value>, continuation: Continuation) {
        match outcome {
            Ok(body) => continuation(Ok(body)),
            Err(err) => {
                if let Err(err) = self.intercept(err) {
                    continuation(Err(err));
                }
            }
        }
    }

    /// Route a transport error to the handler, if one is set.
    ///
    /// Returns the error back when nothing consumed it.
    fn intercept(&self, err: Error) -> Result<()> {
        if !err.is_transport() {
            return Err(err);
        }

        match self.error_handler() {
            Some(handler) => {
                tracing::warn!(error = %err, "transport error routed to error handler");
                handler(err);
                Ok(())
            }
            None => Err(err),
        }
    }

    fn error_handler(&self) -> Option<ErrorHandler> {
        self.error_handler
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_error_handler(&self, handler: ErrorHandler) {
        *self
            .error_handler
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(handler);
    }
}

impl Drop for ClientInner {
    fn drop(&mut self) {
        // Dropping a runtime blocks, which panics inside an async context.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl Clone for Gw2Client {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Gw2Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gw2Client")
            .field("config", &self.inner.config)
            .finish()
    }
}
