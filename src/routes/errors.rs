//! src/routes/errors.rs
use crate::error_messages::{friendly_error, DEFAULT_MESSAGE};
use actix_web::{web, HttpResponse};
use serde_json::Value;

#[derive(serde::Serialize)]
struct Explanation {
    message: String,
}

/// Rephrases an error payload returned by the marketplace backend.
#[tracing::instrument(name = "Explaining a backend error", skip(payload))]
pub async fn explain_error(payload: web::Json<Value>) -> HttpResponse {
    let payload = payload.into_inner();
    let message = friendly_error(Some(&payload), DEFAULT_MESSAGE);
    HttpResponse::Ok().json(Explanation { message })
}
