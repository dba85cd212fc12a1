//! Spawns the real server on a random port.

use advice_service::config::{
    AdviceConfig, CorsConfig, GoogleConfig, TelemetryConfig, DEFAULT_MODEL,
};
use advice_service::services::providers::mock::MockTextProvider;
use advice_service::startup::Application;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn test_config() -> AdviceConfig {
    AdviceConfig {
        common: service_core::config::Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        google: GoogleConfig {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        telemetry: TelemetryConfig {
            log_level: "info".to_string(),
            otlp_endpoint: None,
        },
    }
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app(provider: Arc<MockTextProvider>) -> u16 {
    let app = Application::with_provider(test_config(), provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(Arc::new(MockTextProvider::with_text("ok"))).await;

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn advice_round_trip_over_http() {
    let port = spawn_app(Arc::new(MockTextProvider::with_text("## Analysis"))).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/advice", port))
        .header("origin", "http://localhost:3000")
        .json(&json!({ "age": "60", "condition": "insomnia", "language": "Hindi" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["markdown"], "## Analysis");
}

#[tokio::test]
async fn app_builds_against_gemini_without_api_key() {
    let app = Application::build(test_config())
        .await
        .expect("Missing key must not block startup");
    let port = app.port();
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    let client = Client::new();
    let ready = client
        .get(format!("http://127.0.0.1:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .unwrap();
    assert_eq!(ready.status().as_u16(), 503);

    let advice = client
        .post(format!("http://127.0.0.1:{}/advice", port))
        .json(&json!({ "age": "30", "condition": "cold" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .unwrap();
    assert_eq!(advice.status().as_u16(), 502);
}
