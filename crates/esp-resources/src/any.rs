//! Untyped responses resolved by discriminator.
//!
//! When the caller does not know which resource a payload holds, the payload
//! is classified first and each entity is routed by the fields that only one
//! resource type carries:
//!
//! - `submission_type` -> [`Batch`]
//! - `release_type` -> [`Release`]
//! - `file_name` (without `release_type`) -> [`Contribution`]
//!
//! An entity wrapped in a single key, as in `{"submission_batch": {...}}`,
//! is unwrapped when the inner object carries one of these fields. Anything
//! else is kept as JSON.

use esp_sdk_client::{decode, Result, Shape};
use serde_json::{Map, Value};

use crate::batch::Batch;
use crate::contribution::Contribution;
use crate::release::Release;

#[derive(Debug, Clone, PartialEq)]
pub enum AnyResource {
    Empty,
    Batch(Batch),
    Contribution(Contribution),
    Release(Release),
    Collection {
        items: Vec<AnyResource>,
        total_items: Option<u64>,
    },
    List(Vec<AnyResource>),
    /// A term-keyed validation map or any unrecognized entity.
    Other(Value),
}

impl AnyResource {
    /// Classify a raw payload.
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        Self::from_shape(decode(payload)?)
    }

    pub fn from_shape(shape: Shape) -> Result<Self> {
        Ok(match shape {
            Shape::Empty => AnyResource::Empty,
            Shape::Item(map) => Self::from_entity(map)?,
            Shape::Collection { items, total_items } => AnyResource::Collection {
                items: Self::from_values(items)?,
                total_items,
            },
            Shape::List(items) => AnyResource::List(Self::from_values(items)?),
            Shape::TermMap(map) => Self::from_term_map(map)?,
            Shape::Other(value) => AnyResource::Other(value),
        })
    }

    fn from_values(values: Vec<Value>) -> Result<Vec<Self>> {
        values
            .into_iter()
            .map(|value| match value {
                Value::Object(map) => Self::from_entity(map),
                other => Ok(AnyResource::Other(other)),
            })
            .collect()
    }

    fn from_term_map(map: Map<String, Value>) -> Result<Self> {
        let wrapped = match map.values().next() {
            Some(Value::Object(inner)) if map.len() == 1 && is_entity(inner) => Some(inner.clone()),
            _ => None,
        };

        match wrapped {
            Some(inner) => Self::from_entity(inner),
            None => Ok(AnyResource::Other(Value::Object(map))),
        }
    }

    fn from_entity(map: Map<String, Value>) -> Result<Self> {
        let value = Value::Object(map);
        let has = |field: &str| value.get(field).is_some();

        Ok(if has("submission_type") {
            AnyResource::Batch(serde_json::from_value(value)?)
        } else if has("release_type") {
            AnyResource::Release(serde_json::from_value(value)?)
        } else if has("file_name") {
            AnyResource::Contribution(serde_json::from_value(value)?)
        } else {
            AnyResource::Other(value)
        })
    }

    pub fn as_batch(&self) -> Option<&Batch> {
        match self {
            AnyResource::Batch(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_contribution(&self) -> Option<&Contribution> {
        match self {
            AnyResource::Contribution(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_release(&self) -> Option<&Release> {
        match self {
            AnyResource::Release(r) => Some(r),
            _ => None,
        }
    }
}

fn is_entity(map: &Map<String, Value>) -> bool {
    DISCRIMINATORS.iter().any(|field| map.contains_key(*field))
}

const DISCRIMINATORS: [&str; 3] = ["submission_type", "release_type", "file_name"];
