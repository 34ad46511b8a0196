//! The client facade: generic CRUD verbs over any resource.
//!
//! All four verbs share one path through the pipeline:
//! resource -> [`RequestBuilder`] -> [`Transport`] -> [`Outcome`] -> [`Decoded`].
//! They differ only in the HTTP verb and whether a body is marshaled.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::decode::{self, Decoded, Shape};
use crate::error::{Error, ErrorKind, Result};
use crate::observer::{Observer, TracingObserver};
use crate::outcome::{Dispatch, Outcome};
use crate::request::{Method, Request, RequestBuilder};
use crate::resource::{Locatable, Resource};
use crate::token::Token;
use crate::transport::{HttpTransport, Transport};

/// ESP API client.
///
/// Holds the API key, a bearer token, a transport and an observer. All of
/// them are read-only after construction, so a `Client` can be cloned and
/// shared across tasks freely.
///
/// # Example
///
/// ```rust,ignore
/// use esp_sdk_client::{Client, Reply, Envelope};
///
/// let client = Client::new("api_key", token)?;
///
/// let created: Reply<Batch> = client.create(&batch).await?;
/// let all: Reply<Envelope<Batch>> = client.get(&Batch::default()).await?;
/// let gone: Reply<serde_json::Value> = client.delete(&created_batch).await?;
/// assert!(gone.body().is_empty());
/// ```
#[derive(Clone)]
pub struct Client {
    builder: RequestBuilder,
    token: Token,
    transport: Arc<dyn Transport>,
    observer: Arc<dyn Observer>,
    cancel: CancellationToken,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_root", &self.builder.api_root())
            .field("token", &"[REDACTED]")
            .field("transport", &self.transport)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client against the default API root.
    pub fn new(api_key: impl Into<String>, token: Token) -> Result<Self> {
        Self::with_config(api_key, token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    ///
    /// Fails early if the configured API root is not a valid URL.
    pub fn with_config(
        api_key: impl Into<String>,
        token: Token,
        config: ClientConfig,
    ) -> Result<Self> {
        config.api_root_url()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(
            api_key,
            token,
            config.api_root,
            Arc::new(transport),
        ))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(
        api_key: impl Into<String>,
        token: Token,
        api_root: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            builder: RequestBuilder::new(api_root, api_key),
            token,
            transport,
            observer: Arc::new(TracingObserver),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the observer that receives every outcome.
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// A clone of this client whose requests stop when `cancel` fires.
    pub fn with_cancellation(&self, cancel: CancellationToken) -> Self {
        Self {
            cancel,
            ..self.clone()
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn api_root(&self) -> &str {
        self.builder.api_root()
    }

    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Execute a prepared request.
    ///
    /// Always yields exactly one outcome, which is reported to the observer
    /// before it is returned.
    pub async fn execute(&self, request: Request) -> Outcome {
        let dispatch = Dispatch::start(&request);
        let raw = self.transport.execute(request, &self.cancel).await;
        let outcome = dispatch.collect(raw);
        self.observer.on_outcome(&outcome);
        outcome
    }

    /// Build and execute an authenticated request for `path`.
    pub async fn send(&self, method: Method, path: &str, body: Option<Bytes>) -> Outcome {
        let request = self.builder.build(method, path, &self.token, body);
        self.execute(request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> Result<Reply<T>> {
        if let Some(ref body) = body {
            debug!(len = body.len(), "Marshaled request body");
        }

        let outcome = self.send(method, path, body).await.into_checked()?;

        let body = if outcome.is_success() {
            decode::decode_body(outcome.payload()).map_err(|e| e.with_context(outcome.context()))?
        } else {
            decode::decode_unexpected(outcome.payload())
        };

        Ok(Reply { outcome, body })
    }

    /// Marshal the resource and POST it to its path.
    #[instrument(skip_all, fields(path = %resource.path()))]
    pub async fn create<R, T>(&self, resource: &R) -> Result<Reply<T>>
    where
        R: Resource + ?Sized,
        T: DeserializeOwned,
    {
        let body = resource.marshal()?;
        self.dispatch(Method::Post, &resource.path(), Some(body))
            .await
    }

    /// GET the resource's path.
    #[instrument(skip_all, fields(path = %resource.path()))]
    pub async fn get<L, T>(&self, resource: &L) -> Result<Reply<T>>
    where
        L: Locatable + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(Method::Get, &resource.path(), None).await
    }

    /// Marshal the resource and PUT it to its path.
    #[instrument(skip_all, fields(path = %resource.path()))]
    pub async fn update<R, T>(&self, resource: &R) -> Result<Reply<T>>
    where
        R: Resource + ?Sized,
        T: DeserializeOwned,
    {
        let body = resource.marshal()?;
        self.dispatch(Method::Put, &resource.path(), Some(body))
            .await
    }

    /// DELETE the resource's path.
    ///
    /// An empty response body decodes to [`Decoded::Empty`].
    #[instrument(skip_all, fields(path = %resource.path()))]
    pub async fn delete<L, T>(&self, resource: &L) -> Result<Reply<T>>
    where
        L: Locatable + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(Method::Delete, &resource.path(), None).await
    }

    /// DELETE the resource's path, sending the marshaled resource as the body.
    #[instrument(skip_all, fields(path = %resource.path()))]
    pub async fn delete_with_body<R, T>(&self, resource: &R) -> Result<Reply<T>>
    where
        R: Resource + ?Sized,
        T: DeserializeOwned,
    {
        let body = resource.marshal()?;
        self.dispatch(Method::Delete, &resource.path(), Some(body))
            .await
    }
}

/// A decoded response together with the outcome it came from.
#[derive(Debug)]
pub struct Reply<T> {
    outcome: Outcome,
    body: Decoded<T>,
}

impl<T> Reply<T> {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn body(&self) -> &Decoded<T> {
        &self.body
    }

    pub fn into_body(self) -> Decoded<T> {
        self.body
    }

    pub fn into_parts(self) -> (Outcome, Decoded<T>) {
        (self.outcome, self.body)
    }

    /// The decoded value of a 2xx response with a body.
    pub fn value(&self) -> Option<&T> {
        self.body.value()
    }

    pub fn into_value(self) -> Option<T> {
        self.body.into_value()
    }

    pub fn status_code(&self) -> u16 {
        self.outcome.status_code()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    /// Classify the raw payload without committing to a type.
    pub fn shape(&self) -> Result<Shape> {
        decode::decode(self.outcome.payload())
    }

    /// Turn a non-2xx status into an error, for callers that want that.
    pub fn error_for_status(self) -> Result<Self> {
        if self.outcome.is_success() {
            return Ok(self);
        }
        let context = self.outcome.context();
        Err(Error::new(ErrorKind::UnexpectedStatus {
            status: self.outcome.status_code(),
            status_text: self.outcome.status_text().to_string(),
        })
        .with_context(context))
    }
}
