//! The capability contract every resource implements.
//!
//! A resource is any value that knows where it lives ([`Locatable`]) and how
//! to put itself on the wire ([`Serializable`]). Every `Serialize` type is
//! serializable as JSON, so most resources only implement [`Locatable`].

use bytes::Bytes;
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// A value with a canonical location relative to the API root.
///
/// Without an identifier the path is the collection root; with one it is the
/// item path. The path must be stable for a given identity.
pub trait Locatable {
    fn path(&self) -> String;
}

/// A value with a wire representation.
pub trait Serializable {
    fn marshal(&self) -> Result<Bytes>;
}

impl<T: Serialize + ?Sized> Serializable for T {
    fn marshal(&self) -> Result<Bytes> {
        serde_json::to_vec(self)
            .map(Bytes::from)
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))
    }
}

/// Anything that can be created, fetched, updated and deleted.
pub trait Resource: Locatable + Serializable {}

impl<T: Locatable + Serializable + ?Sized> Resource for T {}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn path(&self) -> String {
        (**self).path()
    }
}

/// Build `root` or `root/id`, percent-encoding the identifier.
pub fn item_path(root: &str, id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("{}/{}", root, urlencoding::encode(id)),
        _ => root.to_string(),
    }
}

/// A bare path. Useful for endpoints with no resource type of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPath(pub String);

impl Locatable for RawPath {
    fn path(&self) -> String {
        self.0.clone()
    }
}
