//! The four generic verbs over the full HTTP stack.

use std::time::Duration;

use super::common::client_for;
use esp_sdk::client::{ErrorKind, Shape};
use esp_sdk::{Batch, BatchType, CancellationToken, Decoded, Locatable, Reply};
use serde_json::Value;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BATCHES: &str = "/submission/v1/submission_batches";

#[tokio::test]
async fn test_create_returns_server_id() {
    let server = MockServer::start().await;
    let (client, observer) = client_for(&server);

    Mock::given(method("POST"))
        .and(path(BATCHES))
        .and(body_json(serde_json::json!({
            "submission_name": "My Photos",
            "submission_type": "getty_creative_still"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "9"})))
        .expect(1)
        .mount(&server)
        .await;

    let batch = Batch::new("My Photos", BatchType::GettyCreativeStill);
    let reply: Reply<Batch> = client.create(&batch).await.unwrap();

    assert_eq!(reply.status_code(), 201);
    assert!(reply.outcome().error().is_none());

    let created = reply.into_value().unwrap();
    assert_eq!(created.id.as_deref(), Some("9"));
    assert_eq!(created.path(), format!("{BATCHES}/9"));
    assert_eq!(observer.observed().len(), 1);
}

#[tokio::test]
async fn test_get_404_keeps_payload_without_error() {
    let server = MockServer::start().await;
    let (client, observer) = client_for(&server);

    Mock::given(method("GET"))
        .and(path(format!("{BATCHES}/404")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "not found"})),
        )
        .mount(&server)
        .await;

    let reply: Reply<Batch> = client.get(&Batch::with_id("404")).await.unwrap();

    assert_eq!(reply.status_code(), 404);
    assert_eq!(reply.outcome().status_text(), "Not Found");
    assert!(!reply.outcome().payload().is_empty());
    assert!(reply.outcome().error().is_none());
    assert_eq!(
        reply.body(),
        &Decoded::Unexpected(serde_json::json!({"message": "not found"}))
    );

    let seen = observer.observed();
    assert_eq!(seen[0].status_code, 404);
    assert!(!seen[0].failed);
}

#[tokio::test]
async fn test_update_puts_batch_changes() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server);

    Mock::given(method("PUT"))
        .and(path(format!("{BATCHES}/77")))
        .and(body_json(serde_json::json!({
            "submission_batch": {"submission_name": "Renamed", "note": "n"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 77, "submission_name": "Renamed", "note": "n",
            "submission_type": "getty_creative_still"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = esp_sdk::BatchUpdate::new(
        "77",
        esp_sdk::resources::BatchChanges {
            submission_name: "Renamed".into(),
            note: "n".into(),
        },
    );
    let reply: Reply<Batch> = client.update(&update).await.unwrap();

    assert_eq!(reply.value().map(|b| b.submission_name.as_str()), Some("Renamed"));
}

#[tokio::test]
async fn test_delete_empty_body_is_empty_sentinel() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server);

    Mock::given(method("DELETE"))
        .and(path(format!("{BATCHES}/77")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let reply: Reply<Value> = client.delete(&Batch::with_id("77")).await.unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.body(), &Decoded::Empty);
}

#[tokio::test]
async fn test_collection_and_item_paths_differ() {
    let server = MockServer::start().await;
    let (client, observer) = client_for(&server);

    Mock::given(method("GET"))
        .and(path(BATCHES))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"id": 77, "submission_type": "getty_creative_still"}],
            "meta": {"total_items": 1}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{BATCHES}/77")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 77, "submission_type": "getty_creative_still"
        })))
        .mount(&server)
        .await;

    let index: Reply<Value> = client.get(&Batch::default()).await.unwrap();
    assert!(matches!(
        index.shape().unwrap(),
        Shape::Collection { total_items: Some(1), .. }
    ));

    let item: Reply<Value> = client.get(&Batch::with_id("77")).await.unwrap();
    assert!(matches!(item.shape().unwrap(), Shape::Item(_)));

    let paths: Vec<String> = observer.observed().into_iter().map(|o| o.path).collect();
    assert_eq!(paths, vec![BATCHES.to_string(), format!("{BATCHES}/77")]);
}

#[tokio::test]
async fn test_duration_populated_on_server_error() {
    let server = MockServer::start().await;
    let (client, _) = client_for(&server);

    Mock::given(method("GET"))
        .and(path(BATCHES))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("boom")
                .set_delay(Duration::from_millis(20)),
        )
        .mount(&server)
        .await;

    let reply: Reply<Value> = client.get(&Batch::default()).await.unwrap();
    let outcome = reply.outcome();

    assert_eq!(outcome.status_code(), 500);
    assert!(outcome.duration() >= Duration::from_millis(20));

    let json: Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
    assert_eq!(json["method"], "GET");
    assert_eq!(json["path"], BATCHES);
    assert_eq!(json["response"]["status_code"], 500);
    assert!(json["response_ms"].as_u64().unwrap() >= 20);

    let err = reply.error_for_status().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_cancelled_request_is_an_error() {
    let server = MockServer::start().await;
    let (client, observer) = client_for(&server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let client = client.with_cancellation(cancel.clone());

    let handle = tokio::spawn(async move { client.get::<_, Value>(&Batch::default()).await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    let err = handle.await.unwrap().unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(observer.observed().len(), 1);
    assert!(observer.observed()[0].failed);
}
