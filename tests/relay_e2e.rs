use axum::body::Body;
use axum::Router;
use http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use prompt_relay::ai::GeminiPromptClient;
use prompt_relay::app::{build_app, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_test_app(upstream_url: &str) -> Router {
    let service = GeminiPromptClient::new("gemini-2.0-flash".to_string())
        .with_base_url(upstream_url.to_string());

    build_app(AppState::with_service(Arc::new(service)))
}

fn generate_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/generate-prompt")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn upstream_success(inner_text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": inner_text }]
            }
        }]
    }))
}

#[tokio::test]
async fn e2e_success_path_returns_unwrapped_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/v1beta/models/.+:generateContent"))
        .and(query_param("key", "secret-key"))
        .respond_with(upstream_success("{\"prompt\":\"Hello\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_test_app(&server.uri());

    let response = app
        .oneshot(generate_request(
            "apiKey=secret-key&promptDetails=say+hello",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    let body = body_bytes(response).await;
    assert_eq!(&body[..], br#"{"prompt":"Hello"}"#);
}

#[tokio::test]
async fn e2e_request_payload_carries_details_and_schema() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/v1beta/models/.+:generateContent"))
        .and(body_string_contains("a castle in the clouds"))
        .and(body_string_contains("\"responseSchema\""))
        .and(body_string_contains("\"required\":[\"prompt\"]"))
        .respond_with(upstream_success("{\"prompt\":\"done\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let app = build_test_app(&server.uri());

    let response = app
        .oneshot(generate_request(
            "apiKey=k&promptDetails=a+castle+in+the+clouds",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn e2e_non_post_method_is_rejected() {
    let app = build_test_app("http://127.0.0.1:1");

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/generate-prompt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Invalid request method." }));
}

#[tokio::test]
async fn e2e_missing_fields_are_rejected() {
    let app = build_test_app("http://127.0.0.1:1");

    let response = app
        .oneshot(generate_request("promptDetails=no+key+given"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "error": "API key and prompt details are required." })
    );
}

#[tokio::test]
async fn e2e_upstream_status_error_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/v1beta/models/.+:generateContent"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": { "message": "Invalid key" }
        })))
        .mount(&server)
        .await;

    let app = build_test_app(&server.uri());

    let response = app
        .oneshot(generate_request("apiKey=bad&promptDetails=scene"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(
        body,
        serde_json::json!({ "error": "Gemini API Error (HTTP 403): Invalid key" })
    );
}

#[tokio::test]
async fn e2e_unparseable_inner_text_is_echoed_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/v1beta/models/.+:generateContent"))
        .respond_with(upstream_success("definitely not json"))
        .mount(&server)
        .await;

    let app = build_test_app(&server.uri());

    let response = app
        .oneshot(generate_request("apiKey=k&promptDetails=scene"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Failed to parse structured prompt from Gemini response."
    );
    assert_eq!(body["raw_gemini_part_text"], "definitely not json");
}

#[tokio::test]
async fn e2e_transport_failure_reports_curl_error() {
    // Nothing listens on port 1.
    let app = build_test_app("http://127.0.0.1:1");

    let response = app
        .oneshot(generate_request("apiKey=k&promptDetails=scene"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(
        message.starts_with("cURL Error: "),
        "unexpected message: {message}"
    );
}
