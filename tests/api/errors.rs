//! tests/api/errors.rs

use crate::helpers::setup;
use serde_json::{json, Value};

#[tokio::test]
async fn field_errors_are_rephrased() {
    // Arrange
    let test = setup().await;
    let payload = json!({
        "detail": [
            { "loc": ["body", "email"], "msg": "value is not a valid email address" },
            { "loc": ["body", "zip_code"], "msg": "field required" }
        ]
    });

    // Act
    let response = test.post_json("/errors/explain", &payload).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(
        body,
        json!({ "message": "Please enter a valid email address. Postal code is required" })
    );
}

#[tokio::test]
async fn duplicate_account_detail_is_rephrased() {
    let test = setup().await;

    let response = test
        .post_json("/errors/explain", &json!({ "detail": "Email already registered" }))
        .await;

    let body: Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(
        body["message"],
        "An account with this email already exists. Please try logging in instead."
    );
}

#[tokio::test]
async fn unknown_payload_falls_back_to_the_default() {
    let test = setup().await;

    for payload in [json!(null), json!({ "status": 500 }), json!([1, 2, 3])] {
        let response = test.post_json("/errors/explain", &payload).await;

        assert_eq!(200, response.status().as_u16());
        let body: Value = response.json().await.expect("Failed to parse body.");
        assert_eq!(body["message"], "Something went wrong. Please try again.");
    }
}
