//! Error types for esp-client.

use std::fmt;
use std::time::Duration;

use crate::request::Method;

/// Result type alias for esp-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for esp-client operations.
///
/// Errors raised while executing a request carry a [`RequestContext`] so the
/// rendered message names the verb, path, status and duration of the call.
#[derive(Debug, thiserror::Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The request this error belongs to, when there is one.
    pub context: Option<RequestContext>,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
            source: None,
        }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            context: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach the request this error was raised for.
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns true if the request never produced an HTTP response.
    pub fn is_network(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Network(_) | ErrorKind::Timeout | ErrorKind::Cancelled
        )
    }

    /// Returns true if the call was cancelled by its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Returns true if a payload could not be decoded into the requested shape.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode(_))
    }

    /// Returns the HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::UnexpectedStatus { status, .. } => Some(*status),
            _ => self.context.as_ref().and_then(|c| c.status),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Transport-level failure: DNS, refused connection, TLS handshake, body read.
    #[error("Network error: {0}")]
    Network(String),

    /// The HTTP stack gave up waiting.
    #[error("Request timeout")]
    Timeout,

    /// The caller's cancellation token fired before the exchange finished.
    #[error("Request cancelled")]
    Cancelled,

    /// Payload did not match the requested shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A resource could not be marshaled into its wire form.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP status outside 2xx. Only raised when a caller opts in through
    /// `Reply::error_for_status`.
    #[error("Unexpected status: {status} {status_text}")]
    UnexpectedStatus { status: u16, status_text: String },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// The request an error was raised for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    /// Missing when the exchange failed before a status line arrived.
    pub status: Option<u16>,
    pub duration: Duration,
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        if let Some(status) = self.status {
            write!(f, " -> {status}")?;
        }
        write!(f, " in {}ms", self.duration.as_millis())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_builder() {
            ErrorKind::InvalidUrl(err.to_string())
        } else {
            ErrorKind::Network(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
