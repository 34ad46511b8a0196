//! Endpoint paths, relative to the API root.

pub use esp_sdk_client::{ESP_API_ROOT, OAUTH_ENDPOINT};

/// Prefix shared by every submission endpoint.
pub const API_INVARIANT: &str = "/submission/v1";

pub const BATCHES: &str = "/submission/v1/submission_batches";
pub const COMPOSITIONS: &str = "/submission/v1/people_metadata/compositions";
pub const CONTROLLED_VALUES: &str = "/submission/v1/controlled_values/index";
pub const EXPRESSIONS: &str = "/submission/v1/people_metadata/expressions";
pub const KEYWORDS: &str = "/submission/v1/keywords/getty";
pub const NUMBER_OF_PEOPLE: &str = "/submission/v1/people_metadata/number_of_people";
pub const PERSONALITIES: &str = "/submission/v1/personalities";
pub const TRANSCODER_MAPPINGS: &str = "/submission/v1/video_transcoder_mapping_values";

/// `BATCHES/{batch_id}/{child}`, the root of a batch's child collection.
pub(crate) fn batch_child_root(batch_id: &str, child: &str) -> String {
    format!("{}/{}/{}", BATCHES, urlencoding::encode(batch_id), child)
}
