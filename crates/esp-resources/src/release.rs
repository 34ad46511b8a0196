//! Releases: the legal agreements for models and property owners.

use std::fmt;

use esp_sdk_client::{item_path, Locatable};
use serde::{Deserialize, Serialize};

use crate::endpoints::batch_child_root;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseType {
    Model,
    Property,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 2] = [ReleaseType::Model, ReleaseType::Property];

    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseType::Model => "Model",
            ReleaseType::Property => "Property",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A release attached to a submission batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Release {
    #[serde(
        default,
        deserialize_with = "crate::id::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::id::required",
        skip_serializing_if = "String::is_empty"
    )]
    pub submission_batch_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub release_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_file_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::id::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub upload_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_ethnicities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_gender: Option<String>,
}

impl Release {
    pub fn new(
        submission_batch_id: impl Into<String>,
        release_type: ReleaseType,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            submission_batch_id: submission_batch_id.into(),
            release_type: release_type.as_str().to_string(),
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// The release index of a batch.
    pub fn index(submission_batch_id: impl Into<String>) -> Self {
        Self {
            submission_batch_id: submission_batch_id.into(),
            ..Default::default()
        }
    }

    /// An existing release.
    pub fn existing(submission_batch_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::index(submission_batch_id)
        }
    }

    /// The release types ESP accepts.
    pub fn valid_types() -> [ReleaseType; 2] {
        ReleaseType::ALL
    }

    pub fn type_is_valid(&self) -> bool {
        ReleaseType::ALL
            .iter()
            .any(|t| t.as_str() == self.release_type)
    }
}

impl Locatable for Release {
    fn path(&self) -> String {
        item_path(
            &batch_child_root(&self.submission_batch_id, "releases"),
            self.id.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_sdk_client::Serializable;

    #[test]
    fn test_path() {
        assert_eq!(
            Release::index("10").path(),
            "/submission/v1/submission_batches/10/releases"
        );
        assert_eq!(
            Release::existing("10", "42").path(),
            "/submission/v1/submission_batches/10/releases/42"
        );
    }

    #[test]
    fn test_type_is_valid() {
        assert!(Release::new("10", ReleaseType::Model, "a.jpg").type_is_valid());
        assert!(Release::new("10", ReleaseType::Property, "a.jpg").type_is_valid());

        let r = Release {
            release_type: "model".into(),
            ..Release::index("10")
        };
        assert!(!r.type_is_valid());
        assert_eq!(Release::valid_types(), [ReleaseType::Model, ReleaseType::Property]);
    }

    #[test]
    fn test_marshal_then_decode_is_identity() {
        let r = Release {
            mime_type: Some("image/jpeg".into()),
            model_ethnicities: vec!["Hispanic".into(), "Pacific Islander".into()],
            model_gender: Some("female".into()),
            ..Release::new("10", ReleaseType::Model, "IMG_1735.JPG")
        };
        let decoded: Release = serde_json::from_slice(&r.marshal().unwrap()).unwrap();
        assert_eq!(decoded, r);
    }

    #[test]
    fn test_decode_server_release() {
        let r: Release = serde_json::from_str(
            r#"{"id":42,"submission_batch_id":10,"release_type":"Property","upload_id":7,"file_name":"x.jpg"}"#,
        )
        .unwrap();
        assert_eq!(r.path(), "/submission/v1/submission_batches/10/releases/42");
        assert_eq!(r.upload_id.as_deref(), Some("7"));
    }
}
