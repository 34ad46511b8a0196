//! Acceptable video transcoder mapping values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscoderMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_composition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastered_to_compression: Option<String>,
}

/// Mappings for Getty and iStock video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscoderMappingList {
    #[serde(default)]
    pub getty_video_mappings: Vec<TranscoderMapping>,
    #[serde(default)]
    pub istock_video_mappings: Vec<TranscoderMapping>,
}
