//! HTTP exchange execution.
//!
//! [`Transport`] is the seam between the request pipeline and the network.
//! [`HttpTransport`] is the reqwest-backed implementation; tests substitute
//! in-memory transports.

use async_trait::async_trait;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::Request;

/// The raw outcome of a request that reached the server.
///
/// A response whose status line arrived but whose body could not be read is
/// still a `RawResponse`; the read failure is kept in `body`.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    /// Reason phrase, e.g. `Not Found`.
    pub status_text: String,
    pub body: std::result::Result<Bytes, Error>,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: Ok(body.into()),
        }
    }

    /// A response whose body failed to read.
    pub fn read_failure(status: u16, status_text: impl Into<String>, error: Error) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: Err(error),
        }
    }

    /// Build a response using the canonical reason phrase for `status`.
    pub fn with_status(status: u16, body: impl Into<Bytes>) -> Self {
        Self::new(status, reason_phrase(status), body)
    }
}

/// Canonical reason phrase for a status code, empty if unknown.
pub fn reason_phrase(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

/// Executes one HTTP exchange.
///
/// Implementations perform no retries. An `Err` means no status line was
/// received (connection, DNS, TLS, timeout or cancellation).
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: Request, cancel: &CancellationToken) -> Result<RawResponse>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    enable_tracing: bool,
}

impl HttpTransport {
    /// Build the underlying HTTP client from configuration.
    ///
    /// Certificate verification stays on unless the configuration opts out.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if config.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            enable_tracing: config.enable_tracing,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request, cancel: &CancellationToken) -> Result<RawResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        if self.enable_tracing {
            debug!(method = %request.method, url = %request.url, "Sending request");
        }

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::new(ErrorKind::Cancelled)),
            sent = req.send() => sent?,
        };

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();

        if self.enable_tracing {
            debug!(
                status = status.as_u16(),
                content_length = response.content_length(),
                "Response received"
            );
        }

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::new(ErrorKind::Cancelled)),
            read = response.bytes() => read.map_err(Error::from),
        };

        Ok(RawResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
