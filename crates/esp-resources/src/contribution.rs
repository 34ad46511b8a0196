//! Contributions: individual assets within a batch.

use esp_sdk_client::{item_path, Locatable};
use serde::{Deserialize, Serialize};

use crate::endpoints::batch_child_root;

/// A contribution belonging to one submission batch.
///
/// `submission_batch_id` is part of the location; it must be set before the
/// contribution is created or fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
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
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_file_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_to_review_at: Option<String>,
}

impl Contribution {
    pub fn new(submission_batch_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            submission_batch_id: submission_batch_id.into(),
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// The contribution index of a batch.
    pub fn index(submission_batch_id: impl Into<String>) -> Self {
        Self {
            submission_batch_id: submission_batch_id.into(),
            ..Default::default()
        }
    }

    /// An existing contribution.
    pub fn existing(submission_batch_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::index(submission_batch_id)
        }
    }
}

impl Locatable for Contribution {
    fn path(&self) -> String {
        item_path(
            &batch_child_root(&self.submission_batch_id, "contributions"),
            self.id.as_deref(),
        )
    }
}
