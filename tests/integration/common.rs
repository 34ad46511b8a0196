use std::sync::{Arc, Once};

use esp_sdk::client::CapturingObserver;
use esp_sdk::{Client, ClientConfig, Token};
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Install a test subscriber once. Controlled by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder().with_api_root(server.uri()).build()
}

/// A client pointed at the mock server, with a capturing observer.
pub fn client_for(server: &MockServer) -> (Client, Arc<CapturingObserver>) {
    init_tracing();
    let observer = Arc::new(CapturingObserver::new());
    let client = Client::with_config("test-key", Token::new("test-token"), config_for(server))
        .expect("client builds")
        .with_observer(observer.clone());
    (client, observer)
}
