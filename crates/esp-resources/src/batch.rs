//! Submission batches.

use std::fmt;
use std::str::FromStr;

use esp_sdk_client::{item_path, Error, ErrorKind, Locatable, Result};
use serde::{Deserialize, Serialize};

use crate::endpoints::BATCHES;

/// The submission types ESP accepts for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchType {
    GettyCreativeVideo,
    GettyEditorialVideo,
    GettyCreativeStill,
    GettyEditorialStill,
    IstockCreativeVideo,
}

impl BatchType {
    pub const ALL: [BatchType; 5] = [
        BatchType::GettyCreativeVideo,
        BatchType::GettyEditorialVideo,
        BatchType::GettyCreativeStill,
        BatchType::GettyEditorialStill,
        BatchType::IstockCreativeVideo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BatchType::GettyCreativeVideo => "getty_creative_video",
            BatchType::GettyEditorialVideo => "getty_editorial_video",
            BatchType::GettyCreativeStill => "getty_creative_still",
            BatchType::GettyEditorialStill => "getty_editorial_still",
            BatchType::IstockCreativeVideo => "istock_creative_video",
        }
    }
}

impl fmt::Display for BatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BatchType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::new(ErrorKind::Other(format!("unknown submission type: {s:?}"))))
    }
}

/// A submission batch.
///
/// Fields the server assigns (`id`, `status`, timestamps, counters) are
/// optional and omitted from the wire form when unset, so a new batch
/// serializes to just what the caller filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    #[serde(
        default,
        deserialize_with = "crate::id::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub submission_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub submission_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub save_extracted_metadata: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributions_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_contributions_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istock_exclusive: Option<bool>,
}

impl Batch {
    pub fn new(submission_name: impl Into<String>, submission_type: BatchType) -> Self {
        Self {
            submission_name: submission_name.into(),
            submission_type: submission_type.as_str().to_string(),
            ..Default::default()
        }
    }

    /// A batch that refers to an existing server-side batch.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn name_is_valid(&self) -> bool {
        !self.submission_name.is_empty()
    }

    pub fn type_is_valid(&self) -> bool {
        self.batch_type().is_some()
    }

    pub fn batch_type(&self) -> Option<BatchType> {
        self.submission_type.parse().ok()
    }

    /// Check the fields ESP requires before a batch can be created.
    pub fn validate(&self) -> Result<()> {
        if !self.name_is_valid() {
            return Err(Error::new(ErrorKind::Other(
                "submission_name cannot be blank".to_string(),
            )));
        }
        self.submission_type.parse::<BatchType>().map(|_| ())
    }
}

impl Locatable for Batch {
    fn path(&self) -> String {
        item_path(BATCHES, self.id.as_deref())
    }
}

/// Editable fields of an existing batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchChanges {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub submission_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

/// An update to an existing batch. Serializes as `{"submission_batch": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchUpdate {
    #[serde(skip)]
    id: String,
    pub submission_batch: BatchChanges,
}

impl BatchUpdate {
    pub fn new(id: impl Into<String>, changes: BatchChanges) -> Self {
        Self {
            id: id.into(),
            submission_batch: changes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Locatable for BatchUpdate {
    fn path(&self) -> String {
        item_path(BATCHES, Some(&self.id))
    }
}
