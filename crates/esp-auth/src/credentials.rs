//! The credential set used for the password-grant exchange.
//!
//! Secrets are redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};

pub const ENV_API_KEY: &str = "ESP_API_KEY";
pub const ENV_API_SECRET: &str = "ESP_API_SECRET";
pub const ENV_USERNAME: &str = "ESP_USERNAME";
pub const ENV_PASSWORD: &str = "ESP_PASSWORD";

/// An application (key and secret) acting on behalf of one ESP user.
///
/// Immutable once constructed. All four fields must be non-empty before a
/// token can be requested.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `ESP_API_KEY`
    /// - `ESP_API_SECRET`
    /// - `ESP_USERNAME`
    /// - `ESP_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| {
            lookup(name).ok_or_else(|| Error::new(ErrorKind::EnvVar(name.to_string())))
        };

        Ok(Self::new(
            var(ENV_API_KEY)?,
            var(ENV_API_SECRET)?,
            var(ENV_USERNAME)?,
            var(ENV_PASSWORD)?,
        ))
    }

    /// The application's API key. Also sent as the `Api-Key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check that every field is non-empty.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(Error::new(ErrorKind::InvalidCredentials(format!(
            "missing {}",
            missing.join(", ")
        ))))
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("api_key", &self.api_key),
            ("api_secret", &self.api_secret),
            ("username", &self.username),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// The password-grant form body.
    pub(crate) fn form_body(&self) -> Result<String> {
        let params = [
            ("client_id", self.api_key.as_str()),
            ("client_secret", self.api_secret.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("grant_type", "password"),
        ];
        Ok(serde_urlencoded::to_string(params)?)
    }
}
