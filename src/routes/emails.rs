//! src/routes/emails.rs
use crate::validation::validate_email;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct EmailCheck {
    #[serde(default)]
    pub email: Option<String>,
}

/// Called on every keystroke of an email field. Always answers 200, a
/// rejected address is reported in the body.
#[tracing::instrument(
    name = "Checking an email address",
    skip(body),
    fields(
        request_id = %Uuid::new_v4(),
        is_valid = tracing::field::Empty,
        suggested = tracing::field::Empty
    )
)]
pub async fn check_email(body: web::Json<EmailCheck>) -> HttpResponse {
    let email = body.into_inner().email.unwrap_or_default();
    let result = validate_email(&email);

    let span = tracing::Span::current();
    span.record("is_valid", result.is_valid);
    span.record("suggested", result.suggestion.is_some());

    HttpResponse::Ok().json(result)
}
