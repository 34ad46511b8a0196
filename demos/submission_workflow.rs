//! End-to-end submission workflow against the ESP sandbox.
//!
//! - Exchanges credentials for a token
//! - Creates a batch, renames it, lists batches
//! - Attaches a release, then cleans up
//!
//! Required environment variables:
//! - ESP_API_KEY, ESP_API_SECRET, ESP_USERNAME, ESP_PASSWORD
//!
//! Run with: RUST_LOG=info cargo run --example submission_workflow

use esp_sdk::resources::{self, BatchChanges};
use esp_sdk::{
    AuthConfig, Batch, BatchType, BatchUpdate, CancellationToken, ClientConfig, Credentials,
    Release, ReleaseType, Reply, TokenProvider,
};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== ESP Submission Workflow ===\n");

    let creds = Credentials::from_env()?;
    let cancel = CancellationToken::new();

    let client = TokenProvider::new(AuthConfig::default())?
        .connect(&creds, ClientConfig::default(), &cancel)
        .await?;
    println!("✓ Authenticated as {}", creds.username());

    let batch = Batch::new("SDK demo batch", BatchType::GettyCreativeStill).note("created by esp-sdk");
    batch.validate()?;

    let created: Reply<Batch> = client.create(&batch).await?;
    println!("  {}", created.outcome().to_json()?);

    let Some(batch) = created.into_value() else {
        println!("✗ Batch was not created");
        return Ok(());
    };
    let Some(batch_id) = batch.id.clone() else {
        println!("✗ Server did not assign an id");
        return Ok(());
    };
    println!("✓ Created batch {batch_id}");

    let update = BatchUpdate::new(
        batch_id.as_str(),
        BatchChanges {
            submission_name: "SDK demo batch (renamed)".into(),
            note: String::new(),
        },
    );
    let renamed: Reply<Batch> = client.update(&update).await?;
    println!("✓ Renamed: HTTP {}", renamed.status_code());

    let index = resources::batches(&client).await?;
    if let Some(batches) = index.value() {
        println!("✓ {} batch(es) on the account", batches.meta.total_items);
    }

    let release = Release::new(batch_id.as_str(), ReleaseType::Property, "IMG_1735.JPG");
    let release: Reply<Release> = client.create(&release).await?;
    println!("  {}", release.outcome().to_json()?);

    if let Some(release) = release.into_value() {
        let gone: Reply<Value> = client.delete(&release).await?;
        println!("✓ Deleted release: HTTP {}", gone.status_code());
    }

    let gone: Reply<Value> = client.delete(&batch).await?;
    println!("✓ Deleted batch: HTTP {}", gone.status_code());

    Ok(())
}
