//! Error types for esp-auth.
//!
//! Error messages never include credential values.

/// Result type alias for esp-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for esp-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the credential set was rejected before any request.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidCredentials(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// One or more credential fields are empty. Names the fields, never values.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// The token request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The token endpoint answered, but not with a usable `access_token`.
    #[error("Malformed token response: {0}")]
    MalformedTokenResponse(String),

    /// OAuth error response from the token endpoint.
    #[error("OAuth error: {error} - {description}")]
    OAuth { error: String, description: String },

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::MalformedTokenResponse(err.to_string()), err)
    }
}

impl From<esp_sdk_client::Error> for Error {
    fn from(err: esp_sdk_client::Error) -> Self {
        let kind = if err.is_network() {
            ErrorKind::Network(err.kind.to_string())
        } else {
            ErrorKind::Other(err.kind.to_string())
        };
        Error::with_source(kind, err)
    }
}
