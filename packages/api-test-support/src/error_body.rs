//! Error body assertions that do not depend on API crate types.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

/// Assert that a response follows the error contract:
/// - HTTP status matches
/// - `x-trace-id` header is present and non-empty
/// - body is JSON with exactly one key, `error`, equal to `expected_error`
pub async fn assert_error_body<B>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_error: &str,
) where
    B: MessageBody,
{
    assert_eq!(resp.status(), expected_status);

    let headers = resp.headers().clone();
    let trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8");
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "Content-Type must be application/json (got {content_type})"
    );

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("Response body should be valid UTF-8");
    let json: Value = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("Failed to parse error body as JSON. Raw body: {body_str}"));

    let object = json.as_object().expect("error body should be a JSON object");
    assert_eq!(object.len(), 1, "error body should have a single key: {json}");
    assert_eq!(json["error"], expected_error);
}
