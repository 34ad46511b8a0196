//! # esp-sdk-auth
//!
//! Authentication for the ESP API.
//!
//! A [`Credentials`] set (API key and secret plus an ESP username and
//! password) is exchanged for a bearer [`Token`] through the OAuth2
//! password grant. The token is then used by every API request, together
//! with the API key.
//!
//! ## Security
//!
//! - Secrets are redacted in Debug output
//! - Tracing skips credential parameters
//! - Incomplete credentials are rejected before any request is made
//!
//! ## Example
//!
//! ```rust,ignore
//! use esp_sdk_auth::{AuthConfig, Credentials, TokenProvider};
//! use esp_sdk_client::{CancellationToken, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), esp_sdk_auth::Error> {
//!     let creds = Credentials::from_env()?;
//!     let provider = TokenProvider::new(AuthConfig::default())?;
//!
//!     let client = provider
//!         .connect(&creds, ClientConfig::default(), &CancellationToken::new())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod provider;

pub use credentials::{Credentials, ENV_API_KEY, ENV_API_SECRET, ENV_PASSWORD, ENV_USERNAME};
pub use error::{Error, ErrorKind, Result};
pub use esp_sdk_client::Token;
pub use provider::{AuthConfig, TokenProvider};
