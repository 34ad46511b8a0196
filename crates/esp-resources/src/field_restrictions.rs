//! Business rules applied to submission fields, per account.
//!
//! The response body is keyed by field name, e.g. `caption` or
//! `collection_code`:
//!
//! ```json
//! {
//!   "body": {"caption": {"required_for_publish": true}},
//!   "max_batch_size": 50,
//!   "model_class": "GettyCreativeStill"
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRestriction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required_for_publish: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRestrictionResponse {
    #[serde(default, deserialize_with = "crate::id::optional", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::id::optional", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub body: BTreeMap<String, FieldRestriction>,
    #[serde(default)]
    pub max_batch_size: u32,
    #[serde(default)]
    pub model_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FieldRestrictionResponse {
    pub fn restriction(&self, field: &str) -> Option<&FieldRestriction> {
        self.body.get(field)
    }

    /// Fields that must be populated before a contribution can be published.
    pub fn required_for_publish(&self) -> impl Iterator<Item = &str> {
        self.body
            .iter()
            .filter(|(_, r)| r.required_for_publish)
            .map(|(field, _)| field.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esp_sdk_client::decode_as;

    #[test]
    fn test_decode_response() {
        let response: FieldRestrictionResponse = decode_as(
            br#"{
                "id": 12,
                "user_id": 3,
                "body": {
                    "caption": {"required_for_publish": true},
                    "collection_code": {"default_value": "ABL", "restriction": "controlled"},
                    "headline": {}
                },
                "max_batch_size": 50,
                "model_class": "GettyCreativeStill"
            }"#,
        )
        .unwrap();

        assert_eq!(response.id.as_deref(), Some("12"));
        assert_eq!(response.max_batch_size, 50);
        assert_eq!(response.required_for_publish().collect::<Vec<_>>(), vec!["caption"]);
        assert_eq!(
            response
                .restriction("collection_code")
                .and_then(|r| r.default_value.as_deref()),
            Some("ABL")
        );
        assert!(response.restriction("city").is_none());
    }

    #[test]
    fn test_missing_body_is_decode_error() {
        let err = decode_as::<FieldRestrictionResponse>(br#"{"max_batch_size": 50}"#).unwrap_err();
        assert!(err.is_decode());
    }
}
