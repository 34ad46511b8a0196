//! # esp-sdk-client
//!
//! Core HTTP pipeline for the ESP (Enterprise Submission Portal) API.
//!
//! This crate provides:
//! - The resource contract ([`Locatable`], [`Serializable`], [`Resource`])
//! - Authenticated request building (`Authorization`, `Api-Key`, JSON content type)
//! - A pluggable [`Transport`] with a reqwest implementation
//! - A per-request [`Outcome`] record with timing, reported to an [`Observer`]
//! - Typed and untyped payload decoding
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (esp-sdk-resources: batches, contributions, releases, ...) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Client                              │
//! │  - create / get / update / delete over any Resource         │
//! │  - Holds API key, token, transport, observer                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              RequestBuilder -> Transport -> Outcome         │
//! │  - One exchange, no retries                                 │
//! │  - Non-2xx recorded, not raised                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use esp_sdk_client::{Client, Reply, Token};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), esp_sdk_client::Error> {
//!     let client = Client::new("api_key", Token::new("abc123"))?;
//!
//!     let reply: Reply<serde_json::Value> = client.get(&my_batch).await?;
//!     println!("{}", reply.outcome().to_json()?);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod decode;
mod error;
mod observer;
mod outcome;
mod request;
mod resource;
mod token;
mod transport;

pub use client::{Client, Reply};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use decode::{decode, decode_as, decode_body, decode_unexpected, is_blank, Decoded, Envelope, Meta, Shape};
pub use error::{Error, ErrorKind, RequestContext, Result};
pub use observer::{CapturingObserver, NoopObserver, Observed, Observer, TracingObserver};
pub use outcome::{Dispatch, Outcome, StatusLine};
pub use request::{Method, Request, RequestBuilder, API_KEY, AUTHORIZATION, CONTENT_TYPE, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE};
pub use resource::{item_path, Locatable, RawPath, Resource, Serializable};
pub use token::Token;
pub use transport::{reason_phrase, HttpTransport, RawResponse, Transport};

/// Re-exported so callers can build cancellation tokens without a direct dependency.
pub use tokio_util::sync::CancellationToken;

/// Default ESP API root (sandbox).
pub const ESP_API_ROOT: &str = "https://esp-sandbox.api.gettyimages.com/esp";

/// OAuth2 token endpoint.
pub const OAUTH_ENDPOINT: &str = "https://api.gettyimages.com/oauth2/token";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("esp-sdk/", env!("CARGO_PKG_VERSION"));
