//! The opaque bearer credential sent with every API request.

use std::fmt;

/// An OAuth2 access token issued by the token endpoint.
///
/// No expiry or scope metadata is tracked; a token is treated as valid for
/// the lifetime of the client that holds it. The value is redacted in Debug
/// output.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw token value, for building the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&"[REDACTED]").finish()
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
