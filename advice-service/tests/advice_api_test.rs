//! HTTP surface tests driven through the router without a socket.

use advice_service::services::providers::mock::MockTextProvider;
use advice_service::services::AdviceClient;
use advice_service::startup::build_router;
use advice_service::AppState;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app(provider: Arc<MockTextProvider>) -> Router {
    build_router(
        AppState::new(AdviceClient::new(provider)),
        &["*".to_string()],
    )
}

fn advice_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/advice")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn advice_returns_markdown_and_sources() {
    let provider = Arc::new(MockTextProvider::with_text("## Health Analysis"));

    let response = app(provider.clone())
        .oneshot(advice_request(json!({
            "age": "45",
            "weight": "70",
            "height": "170",
            "gender": "Male",
            "location": "Kolkata",
            "condition": "joint pain",
            "language": "Bengali"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["markdown"], "## Health Analysis");
    assert_eq!(body["sources"], json!([]));

    let (prompt, _) = provider.last_request().unwrap();
    assert!(prompt.contains("consultation in Bengali"));
}

#[tokio::test]
async fn blank_condition_is_rejected_before_the_backend() {
    let provider = Arc::new(MockTextProvider::with_text("unused"));

    let response = app(provider.clone())
        .oneshot(advice_request(json!({ "age": "30", "condition": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn backend_failure_returns_generic_message() {
    let provider = Arc::new(MockTextProvider::failing("dns lookup failed for api host"));

    let response = app(provider)
        .oneshot(advice_request(json!({ "age": "30", "condition": "fever" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({
            "error": "Failed to get health advice. Please check your connection and try again."
        })
    );
}

#[tokio::test]
async fn response_carries_request_id() {
    let provider = Arc::new(MockTextProvider::with_text("ok"));

    let response = app(provider)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "form-submit-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "form-submit-1");
}

#[tokio::test]
async fn liveness_reports_service() {
    let response = app(Arc::new(MockTextProvider::unconfigured()))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "advice-service");
}

#[tokio::test]
async fn readiness_follows_provider_health() {
    let ready = app(Arc::new(MockTextProvider::with_text("ok")))
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);

    let not_ready = app(Arc::new(MockTextProvider::unconfigured()))
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(not_ready.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(not_ready).await;
    assert_eq!(body, json!({ "error": "Service unavailable" }));
}
