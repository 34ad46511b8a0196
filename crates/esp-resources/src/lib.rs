//! # esp-sdk-resources
//!
//! Typed ESP API resources for the generic client verbs.
//!
//! ## Resources
//!
//! - **Batches** - [`Batch`], [`BatchUpdate`], with submission type validation
//! - **Contributions** - [`Contribution`], nested under a batch
//! - **Releases** - [`Release`], nested under a batch
//! - **Vocabularies** - [`Vocabulary`] GET-only lookups, [`ControlledValues`],
//!   [`TranscoderMappingList`]
//! - **Lookups** - [`EventResponse`] and [`FieldRestrictionResponse`], decode-only
//! - **Untyped payloads** - [`AnyResource`], routed by discriminator field
//!
//! ## Example
//!
//! ```rust,ignore
//! use esp_sdk_client::{Envelope, Reply};
//! use esp_sdk_resources::{Batch, BatchType, Release, ReleaseType};
//!
//! let batch = Batch::new("My Photos", BatchType::GettyCreativeStill);
//! batch.validate()?;
//! let created: Reply<Batch> = client.create(&batch).await?;
//!
//! let batches: Reply<Envelope<Batch>> = client.get(&Batch::default()).await?;
//!
//! let release = Release::new("81421", ReleaseType::Property, "IMG_1735.JPG");
//! let created: Reply<Release> = client.create(&release).await?;
//! ```

mod any;
mod batch;
mod contribution;
mod controlled_values;
pub mod endpoints;
mod events;
mod field_restrictions;
mod id;
mod ops;
mod release;
mod transcoder;
mod vocabulary;

pub use any::AnyResource;
pub use batch::{Batch, BatchChanges, BatchType, BatchUpdate};
pub use contribution::Contribution;
pub use controlled_values::{ControlledFields, ControlledValue, ControlledValues};
pub use events::{Event, EventResponse};
pub use field_restrictions::{FieldRestriction, FieldRestrictionResponse};
pub use ops::{batches, controlled_values, delete_last_batch, releases, transcoder_mappings};
pub use release::{Release, ReleaseType};
pub use transcoder::{TranscoderMapping, TranscoderMappingList};
pub use vocabulary::Vocabulary;
