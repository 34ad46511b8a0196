//! OAuth2 password-grant token exchange.

use std::sync::Arc;

use esp_sdk_client::{
    CancellationToken, Client, ClientConfig, HttpTransport, Method, Request, Token, Transport,
    CONTENT_TYPE, FORM_CONTENT_TYPE,
};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};

/// Token endpoint configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Where the password-grant form is POSTed.
    pub token_url: String,
    /// HTTP settings for the token request.
    pub http: ClientConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_url: esp_sdk_client::OAUTH_ENDPOINT.to_string(),
            http: ClientConfig::default(),
        }
    }
}

impl AuthConfig {
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_http(mut self, http: ClientConfig) -> Self {
        self.http = http;
        self
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
}

#[derive(Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}

/// Exchanges a credential set for a bearer token.
///
/// Each call makes exactly one request. Nothing is cached and nothing is
/// retried; a token is treated as valid for as long as the caller keeps it.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    token_url: String,
    transport: Arc<dyn Transport>,
}

impl TokenProvider {
    /// Create a provider with its own HTTP transport.
    pub fn new(config: AuthConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.http)?;
        Ok(Self::with_transport(config.token_url, Arc::new(transport)))
    }

    /// Create a provider over an arbitrary transport.
    pub fn with_transport(token_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            token_url: token_url.into(),
            transport,
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Request a token.
    ///
    /// Incomplete credentials are rejected before any network call.
    #[instrument(skip(self, credentials, cancel), fields(token_url = %self.token_url))]
    pub async fn get_token(
        &self,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<Token> {
        credentials.validate()?;

        let request = Request::new(Method::Post, self.token_url.as_str(), self.token_url.as_str())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(credentials.form_body()?);

        debug!(username = credentials.username(), "Requesting access token");

        let raw = self.transport.execute(request, cancel).await?;
        let status = raw.status;
        let payload = raw.body?;

        debug!(status, "Token endpoint responded");

        if !(200..300).contains(&status) {
            warn!(status, "Token request rejected");
            return Err(match serde_json::from_slice::<OAuthErrorResponse>(&payload) {
                Ok(oauth) => Error::new(ErrorKind::OAuth {
                    error: oauth.error,
                    description: oauth.error_description,
                }),
                Err(_) => Error::new(ErrorKind::MalformedTokenResponse(format!(
                    "HTTP {} {}",
                    status, raw.status_text
                ))),
            });
        }

        let response: TokenResponse = serde_json::from_slice(&payload)?;
        if response.access_token.is_empty() {
            return Err(Error::new(ErrorKind::MalformedTokenResponse(
                "missing access_token".to_string(),
            )));
        }

        Ok(Token::new(response.access_token))
    }

    /// Request a token and build a [`Client`] for the same credential set.
    #[instrument(skip_all)]
    pub async fn connect(
        &self,
        credentials: &Credentials,
        config: ClientConfig,
        cancel: &CancellationToken,
    ) -> Result<Client> {
        let token = self.get_token(credentials, cancel).await?;
        let client = Client::with_config(credentials.api_key(), token, config)?;
        Ok(client.with_cancellation(cancel.clone()))
    }
}
