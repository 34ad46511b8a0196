//! Fields whose values ESP validates against a fixed list.
//!
//! The index payload puts `batch_types` next to one object per asset type:
//!
//! ```json
//! {
//!   "batch_types": ["getty_creative_still", "..."],
//!   "getty_creative_still": {
//!     "collection_code": [{"description": "AbleStock.com", "value": "ABL"}]
//!   },
//!   "releases": {"model_ethnicities": [{"description": "...", "value": "..."}]}
//! }
//! ```
//!
//! Inside the object parsing is lenient: entries of an unexpected shape are
//! skipped. A top level that is not an object is rejected. Serialization
//! writes the same layout back.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const BATCH_TYPES: &str = "batch_types";

/// One permitted value: a human label and its machine value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlledValue {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: String,
}

/// Field name -> permitted values.
pub type ControlledFields = BTreeMap<String, Vec<ControlledValue>>;

/// The parsed controlled-values index.
///
/// Asset types (and `releases`) are keys of `controlled_fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlledValues {
    pub batch_types: Vec<String>,
    pub controlled_fields: BTreeMap<String, ControlledFields>,
}

impl ControlledValues {
    /// Build from an untyped index payload.
    ///
    /// Returns `None` unless the payload is a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut parsed = Self::default();

        for (key, data) in object {
            match data {
                Value::Array(items) if key == BATCH_TYPES => {
                    parsed.batch_types = items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect();
                }
                Value::Object(fields) => {
                    parsed
                        .controlled_fields
                        .insert(key.clone(), parse_fields(fields));
                }
                _ => {}
            }
        }

        Some(parsed)
    }

    /// Permitted values of `field` for `asset_type`.
    pub fn values(&self, asset_type: &str, field: &str) -> Option<&[ControlledValue]> {
        self.controlled_fields
            .get(asset_type)
            .and_then(|fields| fields.get(field))
            .map(Vec::as_slice)
    }

    pub fn asset_types(&self) -> impl Iterator<Item = &str> {
        self.controlled_fields.keys().map(String::as_str)
    }
}

fn parse_fields(fields: &serde_json::Map<String, Value>) -> ControlledFields {
    fields
        .iter()
        .filter_map(|(name, values)| {
            let values = values.as_array()?;
            let parsed = values
                .iter()
                .filter_map(Value::as_object)
                .map(|entry| ControlledValue {
                    description: text(entry.get("description")),
                    value: text(entry.get("value")),
                })
                .collect();
            Some((name.clone(), parsed))
        })
        .collect()
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for ControlledValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| D::Error::custom("expected controlled-values object"))
    }
}

impl Serialize for ControlledValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.controlled_fields.len() + 1))?;
        map.serialize_entry(BATCH_TYPES, &self.batch_types)?;
        for (asset_type, fields) in &self.controlled_fields {
            map.serialize_entry(asset_type, fields)?;
        }
        map.end()
    }
}
