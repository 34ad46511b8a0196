//! HTTP request building with ESP-specific headers.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::token::Token;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const API_KEY: &str = "Api-Key";

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a body handed to the builder is attached for this verb.
    ///
    /// DELETE is included: some ESP endpoints take a payload on delete.
    pub fn carries_body(self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport-ready request. Consumed exactly once by a [`Transport`].
///
/// Credential-bearing headers are redacted in Debug output.
///
/// [`Transport`]: crate::Transport
#[derive(Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) path: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Bytes>,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if is_sensitive(name) {
                    (name.as_str(), "[REDACTED]")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .finish()
    }
}

fn is_sensitive(header: &str) -> bool {
    header.eq_ignore_ascii_case(AUTHORIZATION) || header.eq_ignore_ascii_case(API_KEY)
}

impl Request {
    /// Create a request against an absolute URL.
    ///
    /// `path` is kept separately for logging; for API requests it is the
    /// resource path relative to the API root.
    pub fn new(method: Method, url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Attach a body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

/// Assembles authenticated API requests.
///
/// Every request carries `Authorization: Token token=<token>`, a JSON
/// `Content-Type` and the application's `Api-Key`. The API key comes from the
/// credential set and is independent of the bearer token.
#[derive(Clone)]
pub struct RequestBuilder {
    api_root: String,
    api_key: String,
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("api_root", &self.api_root)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl RequestBuilder {
    pub fn new(api_root: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Build the absolute URL for a resource path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_root, path)
        } else {
            format!("{}/{}", self.api_root, path)
        }
    }

    /// Build a request. The body is dropped for verbs that never carry one.
    pub fn build(&self, method: Method, path: &str, token: &Token, body: Option<Bytes>) -> Request {
        let mut request = Request::new(method, self.url(path), path)
            .header(AUTHORIZATION, format!("Token token={}", token.as_str()))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(API_KEY, self.api_key.as_str());

        if method.carries_body() {
            request.body = body;
        }

        request
    }
}
