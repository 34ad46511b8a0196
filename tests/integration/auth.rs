//! Token exchange against a mock OAuth endpoint.

use super::common::{config_for, init_tracing};
use esp_sdk::auth::ErrorKind;
use esp_sdk::{AuthConfig, CancellationToken, Credentials, TokenProvider};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer) -> TokenProvider {
    TokenProvider::new(
        AuthConfig::default().with_token_url(format!("{}/oauth2/token", server.uri())),
    )
    .expect("provider builds")
}

#[tokio::test]
async fn test_password_grant_returns_token() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("client_id=k"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "abc123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = provider(&server)
        .get_token(&Credentials::new("k", "s", "u", "p"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(token.as_str(), "abc123");
}

#[tokio::test]
async fn test_incomplete_credentials_never_reach_the_server() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider(&server)
        .get_token(&Credentials::new("k", "s", "u", ""), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidCredentials(_)));
}

#[tokio::test]
async fn test_connected_client_sends_token_and_api_key() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "abc123"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/submission/v1/submission_batches"))
        .and(header("Authorization", "Token token=abc123"))
        .and(header("Api-Key", "k"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"items": [], "meta": {"total_items": 0}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = provider(&server)
        .connect(
            &Credentials::new("k", "s", "u", "p"),
            config_for(&server),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let reply = esp_sdk::resources::batches(&client).await.unwrap();
    assert_eq!(reply.status_code(), 200);
    assert!(reply.value().unwrap().is_empty());
}
