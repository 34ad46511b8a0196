//! Multi-step operations built on the generic verbs.

use esp_sdk_client::{Client, Envelope, Error, ErrorKind, Reply, Result};
use serde_json::Value;
use tracing::{info, instrument};

use crate::batch::Batch;
use crate::controlled_values::ControlledValues;
use crate::endpoints::BATCHES;
use crate::release::Release;
use crate::transcoder::TranscoderMappingList;
use crate::vocabulary::Vocabulary;

/// List every batch, oldest first.
pub async fn batches(client: &Client) -> Result<Reply<Envelope<Batch>>> {
    client.get(&Batch::default()).await
}

/// List the releases of a batch.
pub async fn releases(client: &Client, batch_id: &str) -> Result<Reply<Vec<Release>>> {
    client.get(&Release::index(batch_id)).await
}

pub async fn controlled_values(client: &Client) -> Result<Reply<ControlledValues>> {
    client.get(&Vocabulary::ControlledValues).await
}

pub async fn transcoder_mappings(client: &Client) -> Result<Reply<TranscoderMappingList>> {
    client.get(&Vocabulary::TranscoderMappings).await
}

/// Look up the newest batch and delete it.
///
/// Fails if the index request does not succeed or lists no batches.
#[instrument(skip(client))]
pub async fn delete_last_batch(client: &Client) -> Result<Reply<Value>> {
    let index = batches(client).await?.error_for_status()?;

    let last = index
        .value()
        .and_then(Envelope::last)
        .cloned()
        .ok_or_else(|| {
            Error::new(ErrorKind::Other(format!("no batches to delete in {}", BATCHES)))
                .with_context(index.outcome().context())
        })?;

    let Some(id) = last.id.as_deref() else {
        return Err(Error::new(ErrorKind::Other(
            "newest batch has no id".to_string(),
        ))
        .with_context(index.outcome().context()));
    };

    info!(id, "Deleting newest batch");
    client.delete(&last).await
}
