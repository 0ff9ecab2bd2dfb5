//! Shared test utilities.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a backend review record.
pub fn review_json(id: u64, product_name: &str, sentiment: &str) -> Value {
    json!({
        "id": id,
        "product_name": product_name,
        "review_text": "Battery lasts two days and the screen is sharp.",
        "sentiment": sentiment,
        "sentiment_score": 0.91,
        "key_points": "Long battery life\nSharp screen\nHeavy",
        "created_at": "2024-03-05T14:30:00"
    })
}

/// Wraps `data` in a successful response envelope.
pub fn success_envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

/// Mounts a review list response returning `reviews` on `server`.
pub async fn mount_reviews(server: &MockServer, reviews: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/reviews"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_envelope(Value::Array(reviews))),
        )
        .mount(server)
        .await;
}

/// Mounts an analysis response returning `review` with `201 Created`.
pub async fn mount_analysis(server: &MockServer, review: Value) {
    Mock::given(method("POST"))
        .and(path("/api/analyze-review"))
        .respond_with(ResponseTemplate::new(201).set_body_json(success_envelope(review)))
        .mount(server)
        .await;
}
