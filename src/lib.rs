//! # esp-sdk
//!
//! A client library for the Getty Images Enterprise Submission Portal (ESP) API.
//!
//! Any value that knows its path and can serialize itself is a resource, and
//! every resource gets the same four verbs: create, get, update and delete.
//!
//! ## Security
//!
//! - Tokens, API keys and secrets are redacted in Debug output
//! - Tracing skips credential parameters
//! - TLS certificate verification is on unless explicitly disabled
//!
//! ## Crates
//!
//! - **esp-sdk-client** - Request pipeline: resource contract, transport, outcomes, decoding
//! - **esp-sdk-auth** - Credential sets and the OAuth2 password-grant token exchange
//! - **esp-sdk-resources** - Batches, contributions, releases and vocabularies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use esp_sdk::{AuthConfig, Batch, BatchType, CancellationToken, ClientConfig, Credentials, Reply, TokenProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = TokenProvider::new(AuthConfig::default())?
//!         .connect(&creds, ClientConfig::default(), &CancellationToken::new())
//!         .await?;
//!
//!     let batch = Batch::new("My Photos", BatchType::GettyCreativeStill);
//!     let created: Reply<Batch> = client.create(&batch).await?;
//!     println!("{}", created.outcome().to_json()?);
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "auth")]
pub use esp_sdk_auth as auth;
#[cfg(feature = "client")]
pub use esp_sdk_client as client;
#[cfg(feature = "resources")]
pub use esp_sdk_resources as resources;

#[cfg(feature = "auth")]
pub use esp_sdk_auth::{AuthConfig, Credentials, TokenProvider};
#[cfg(feature = "client")]
pub use esp_sdk_client::{
    CancellationToken, Client, ClientConfig, Decoded, Envelope, Locatable, Outcome, Reply,
    Resource, Token,
};
#[cfg(feature = "resources")]
pub use esp_sdk_resources::{
    AnyResource, Batch, BatchType, BatchUpdate, Contribution, Release, ReleaseType, Vocabulary,
};
