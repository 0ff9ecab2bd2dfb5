//! Integration tests for the HTTP review gateway against a mock backend.

use std::time::Duration;

use review_analyzer::{
    ApiError, HttpReviewGateway, ReviewDraft, ReviewGateway, analysis_error_message,
};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

use support::{mount_analysis, mount_reviews, review_json};

fn gateway_for(server: &MockServer) -> HttpReviewGateway {
    HttpReviewGateway::new(&server.uri(), Duration::from_secs(5))
        .unwrap_or_else(|error| panic!("gateway should build: {error}"))
}

fn draft() -> ReviewDraft {
    ReviewDraft::new("Phone X", "Battery lasts two days and the screen is sharp.")
        .unwrap_or_else(|error| panic!("draft should be valid: {error}"))
}

#[tokio::test]
async fn list_reviews_returns_records_in_server_order() {
    let server = MockServer::start().await;
    mount_reviews(
        &server,
        vec![
            review_json(7, "Kettle", "neutral"),
            review_json(3, "Toaster", "negative"),
        ],
    )
    .await;

    let reviews = gateway_for(&server)
        .list_reviews()
        .await
        .unwrap_or_else(|error| panic!("list should succeed: {error}"));

    let ids: Vec<u64> = reviews.iter().map(|review| review.id).collect();
    assert_eq!(ids, vec![7, 3]);
    assert_eq!(
        reviews.first().map(|review| review.product_name.as_str()),
        Some("Kettle")
    );
}

#[tokio::test]
async fn analyze_review_posts_json_and_accepts_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "product_name": "Phone X",
            "review_text": "Battery lasts two days and the screen is sharp."
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": review_json(12, "Phone X", "positive")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let review = gateway_for(&server)
        .analyze_review(&draft())
        .await
        .unwrap_or_else(|error| panic!("analysis should succeed: {error}"));

    assert_eq!(review.id, 12);
    assert_eq!(review.sentiment, "positive");
    assert_eq!(review.key_points, "Long battery life\nSharp screen\nHeavy");
}

#[tokio::test]
async fn base_url_path_prefix_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/backend/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpReviewGateway::new(
        &format!("{}/backend", server.uri()),
        Duration::from_secs(5),
    )
    .unwrap_or_else(|error| panic!("gateway should build: {error}"));
    let reviews = gateway
        .list_reviews()
        .await
        .unwrap_or_else(|error| panic!("list should succeed: {error}"));

    assert!(reviews.is_empty());
}

#[rstest]
#[case(400, json!({ "success": false, "error": "Product name and review text are required" }), Some("Product name and review text are required"))]
#[case(500, json!({ "success": false, "error": "Gemini quota exceeded" }), Some("Gemini quota exceeded"))]
#[case(502, json!({ "detail": "bad gateway" }), None)]
#[tokio::test]
async fn error_statuses_become_server_errors(
    #[case] status: u16,
    #[case] body: serde_json::Value,
    #[case] expected_message: Option<&str>,
) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;

    let error = gateway_for(&server)
        .analyze_review(&draft())
        .await
        .expect_err("error status should fail");

    assert_eq!(
        error,
        ApiError::Server {
            status,
            message: expected_message.map(ToOwned::to_owned),
        }
    );
}

#[tokio::test]
async fn server_reason_is_shown_to_the_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": "Review text is too short"
        })))
        .mount(&server)
        .await;

    let error = gateway_for(&server)
        .analyze_review(&draft())
        .await
        .expect_err("bad request should fail");

    assert_eq!(analysis_error_message(&error), "Review text is too short");
}

#[tokio::test]
async fn unsuccessful_envelope_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "database unavailable"
        })))
        .mount(&server)
        .await;

    let error = gateway_for(&server)
        .list_reviews()
        .await
        .expect_err("unsuccessful envelope should fail");

    assert_eq!(
        error,
        ApiError::Unsuccessful {
            message: Some("database unavailable".to_owned()),
        }
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let error = gateway_for(&server)
        .list_reviews()
        .await
        .expect_err("HTML body should fail to decode");

    assert!(matches!(error, ApiError::Decode { .. }), "got {error:?}");
    assert_eq!(
        analysis_error_message(&error),
        "An error occurred while analyzing the review"
    );
}

#[tokio::test]
async fn health_reports_service_readiness() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "sentiment_analyzer": true,
            "gemini_configured": false
        })))
        .mount(&server)
        .await;

    let status = gateway_for(&server)
        .health()
        .await
        .unwrap_or_else(|error| panic!("health should succeed: {error}"));

    assert!(status.is_healthy());
    assert!(status.sentiment_analyzer);
    assert!(!status.gemini_configured);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let gateway = HttpReviewGateway::new(&uri, Duration::from_secs(2))
        .unwrap_or_else(|error| panic!("gateway should build: {error}"));
    let error = gateway
        .health()
        .await
        .expect_err("stopped server should be unreachable");

    assert!(matches!(error, ApiError::Network { .. }), "got {error:?}");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({ "success": true, "data": [] })),
        )
        .mount(&server)
        .await;

    let gateway = HttpReviewGateway::new(&server.uri(), Duration::from_millis(200))
        .unwrap_or_else(|error| panic!("gateway should build: {error}"));
    let error = gateway
        .list_reviews()
        .await
        .expect_err("slow response should time out");

    assert!(matches!(error, ApiError::Network { .. }), "got {error:?}");
}

#[tokio::test]
async fn created_review_appears_in_next_listing() {
    let server = MockServer::start().await;
    mount_analysis(&server, review_json(1, "Phone X", "positive")).await;
    mount_reviews(&server, vec![review_json(1, "Phone X", "positive")]).await;
    let gateway = gateway_for(&server);

    let created = gateway
        .analyze_review(&draft())
        .await
        .unwrap_or_else(|error| panic!("analysis should succeed: {error}"));
    let listed = gateway
        .list_reviews()
        .await
        .unwrap_or_else(|error| panic!("list should succeed: {error}"));

    assert_eq!(listed, vec![created]);
}
