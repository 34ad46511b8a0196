//! Nested resources, vocabularies and untyped payloads.

use super::common::client_for;
use esp_sdk::resources::{delete_last_batch, ControlledValues};
use esp_sdk::{AnyResource, Contribution, Release, ReleaseType, Reply, Vocabulary};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_release_lifecycle_under_batch() {
    let server = MockServer::start().await;
    let (client, observer) = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/submission/v1/submission_batches/10/releases"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 42, "submission_batch_id": 10, "release_type": "Property",
            "file_name": "IMG_1735.JPG"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/submission/v1/submission_batches/10/releases/42"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let release = Release::new("10", ReleaseType::Property, "IMG_1735.JPG");
    let created: Reply<Release> = client.create(&release).await.unwrap();
    let created = created.into_value().unwrap();
    assert_eq!(created.id.as_deref(), Some("42"));

    let deleted: Reply<Value> = client.delete(&created).await.unwrap();
    assert!(deleted.body().is_empty());

    let paths: Vec<String> = observer.observed().into_iter().map(|o| o.path).collect();
    assert_eq!(
        paths,
        vec![
            "/submission/v1/submission_batches/10/releases".to_string(),
            "/submission/v1/submission_batches/10/releases/42".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_contribution_get() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/submission/v1/submission_batches/81421/contributions/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 5, "submission_batch_id": 81421, "file_name": "IMG_9235.JPG",
            "headline": "My Photo Title"
        })))
        .mount(&server)
        .await;

    let reply: Reply<Contribution> = client
        .get(&Contribution::existing("81421", "5"))
        .await
        .unwrap();
    assert_eq!(
        reply.value().and_then(|c| c.headline.as_deref()),
        Some("My Photo Title")
    );
}

#[tokio::test]
async fn test_vocabulary_lookups() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server);

    Mock::given(method("GET"))
        .and(path(Vocabulary::Compositions.as_path()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!(["Close-up", "Full Length"])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(Vocabulary::ControlledValues.as_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "batch_types": ["getty_creative_still", "istock_creative_video"],
            "releases": {"model_gender": [{"description": "Female", "value": "female"}]}
        })))
        .mount(&server)
        .await;

    let compositions: Reply<Vec<String>> = client.get(&Vocabulary::Compositions).await.unwrap();
    assert_eq!(compositions.value().map(Vec::len), Some(2));

    let cv: Reply<ControlledValues> = client.get(&Vocabulary::ControlledValues).await.unwrap();
    let cv = cv.into_value().unwrap();
    assert_eq!(cv.batch_types.len(), 2);
    assert_eq!(cv.values("releases", "model_gender").map(|v| v[0].value.as_str()), Some("female"));
}

#[tokio::test]
async fn test_untyped_index_is_routed_by_discriminator() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/submission/v1/submission_batches/10/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "release_type": "Model"},
            {"id": 2, "release_type": "Property"}
        ])))
        .mount(&server)
        .await;

    let reply: Reply<Value> = client.get(&Release::index("10")).await.unwrap();
    let any = AnyResource::from_payload(reply.outcome().payload()).unwrap();

    match any {
        AnyResource::List(items) => {
            assert_eq!(items.len(), 2);
            assert!(items.iter().all(|i| i.as_release().is_some()));
        }
        other => panic!("expected a list of releases, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_last_batch_with_nothing_to_delete() {
    let server = MockServer::start().await;
    let (client, observer) = client_for(&server);

    Mock::given(method("GET"))
        .and(path("/submission/v1/submission_batches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&server)
        .await;

    let err = delete_last_batch(&client).await.unwrap_err();
    assert!(err.to_string().contains("no batches"));
    assert_eq!(observer.observed().len(), 1);
}
