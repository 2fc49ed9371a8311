//! tests/api/registrations.rs

use crate::helpers::setup;
use serde_json::{json, Value};

fn adopter() -> Value {
    json!({
        "account_type": "adopter",
        "full_name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "password": "earthsea-1968",
        "confirm_password": "earthsea-1968",
        "city": "Portland",
        "state": "Oregon",
        "zip_code": "97201"
    })
}

#[tokio::test]
async fn valid_adopter_form_returns_a_200_with_a_username() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post_json("/registrations/validate", &adopter()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(body["account_type"], "adopter");
    assert_eq!(body["email"], "ursula_le_guin@gmail.com");
    let username = body["username"].as_str().expect("Missing username.");
    assert!(username.starts_with("ursula_le_guin_"), "{}", username);
}

#[tokio::test]
async fn valid_shelter_form_returns_a_200() {
    let test = setup().await;
    let form = json!({
        "account_type": "shelter",
        "name": "Happy Tails",
        "email": "hello@happytails.org",
        "password": "wagging-tails",
        "confirm_password": "wagging-tails",
        "city": "Lahore",
        "state": "Punjab",
        "zip_code": "54000"
    });

    let response = test.post_json("/registrations/validate", &form).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn mismatched_passwords_return_a_400() {
    let test = setup().await;
    let mut form = adopter();
    form["confirm_password"] = json!("earthsea-1969");

    let response = test.post_json("/registrations/validate", &form).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse body.");
    assert_eq!(
        body,
        json!({ "errors": [{ "field": "confirm_password", "message": "Passwords do not match" }] })
    );
}

#[tokio::test]
async fn invalid_fields_are_all_reported() {
    let test = setup().await;
    let test_cases = vec![
        ("email", json!("ursula_le_guin@gmial.com"), "Did you mean ursula_le_guin@gmail.com?"),
        ("email", json!("ursula"), "Please enter a valid email address"),
        ("password", json!("short"), "Password must be at least 8 characters long."),
        ("full_name", json!("  "), "Full name is required"),
        ("zip_code", json!(""), "Postal code is required"),
    ];

    for (field, value, expected) in test_cases {
        let mut form = adopter();
        form[field] = value;

        let response = test.post_json("/registrations/validate", &form).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when {} was invalid.",
            field
        );
        let body: Value = response.json().await.expect("Failed to parse body.");
        assert_eq!(body["errors"][0]["field"], field);
        assert_eq!(body["errors"][0]["message"], expected);
    }
}

#[tokio::test]
async fn empty_form_reports_every_required_field() {
    let test = setup().await;

    let response = test.post_json("/registrations/validate", &json!({})).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.expect("Failed to parse body.");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .expect("Missing errors.")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(
        fields,
        vec!["full_name", "email", "password", "city", "state", "zip_code"]
    );
}
