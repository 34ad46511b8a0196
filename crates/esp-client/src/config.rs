//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// Configuration for the ESP client and its HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root URL every resource path is appended to.
    pub api_root: String,
    /// Skip TLS certificate verification. Development only.
    pub accept_invalid_certs: bool,
    /// Request timeout. `None` leaves the HTTP stack's default in place.
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: crate::ESP_API_ROOT.to_string(),
            accept_invalid_certs: false,
            timeout: None,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse the API root.
    ///
    /// Fails with [`ErrorKind::InvalidUrl`] when the root is not an absolute
    /// URL that resource paths can be appended to.
    pub fn api_root_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_root)?;
        if url.cannot_be_a_base() {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "API root cannot take a path: {}",
                self.api_root
            ))));
        }
        Ok(url)
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API root (e.g. a sandbox or a local mock server).
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.config.api_root = api_root.into().trim_end_matches('/').to_string();
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// Only meant for development against hosts with self-signed
    /// certificates. Never enable this against production.
    pub fn danger_accept_invalid_certs(mut self, enabled: bool) -> Self {
        self.config.accept_invalid_certs = enabled;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_secure() {
        let config = ClientConfig::default();
        assert!(!config.accept_invalid_certs);
        assert!(config.timeout.is_none());
        assert_eq!(config.api_root, crate::ESP_API_ROOT);
        assert!(config.user_agent.contains("esp-sdk"));
        assert!(config.api_root_url().is_ok());
    }

    #[test]
    fn test_api_root_must_be_absolute() {
        for root in ["esp.example.com/esp", "", "mailto:ops@example.com"] {
            let config = ClientConfig::builder().with_api_root(root).build();
            let err = config.api_root_url().unwrap_err();
            assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)), "{root}");
        }

        let config = ClientConfig::builder()
            .with_api_root("http://127.0.0.1:8080/esp")
            .build();
        assert_eq!(config.api_root_url().unwrap().path(), "/esp");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .with_api_root("http://127.0.0.1:8080/esp/")
            .with_timeout(Duration::from_secs(5))
            .danger_accept_invalid_certs(true)
            .with_user_agent("custom-agent/1.0")
            .with_tracing(false)
            .build();

        assert_eq!(config.api_root, "http://127.0.0.1:8080/esp");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(config.accept_invalid_certs);
        assert_eq!(config.user_agent, "custom-agent/1.0");
        assert!(!config.enable_tracing);
    }
}
