//! src/routes/registrations.rs
use crate::domain::{AccountType, NewAccount, RegistrationError, RegistrationForm};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
struct AcceptedRegistration<'a> {
    account_type: AccountType,
    username: String,
    email: &'a str,
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "errors": self.errors,
        }))
    }
}

/// Runs the sign-up form checks before the form is sent to the backend.
#[tracing::instrument(
    name = "Validating a registration form",
    skip(form),
    fields(
        request_id = %Uuid::new_v4(),
        account_type = ?form.account_type
    )
)]
pub async fn validate_registration(
    form: web::Json<RegistrationForm>,
) -> Result<HttpResponse, RegistrationError> {
    let account = NewAccount::try_from(form.into_inner()).map_err(|e| {
        let failed: Vec<&str> = e.errors.iter().map(|f| f.field).collect();
        tracing::info!(failed_fields = ?failed, "{}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(AcceptedRegistration {
        account_type: account.account_type,
        username: account.username(Utc::now()),
        email: account.email.as_ref(),
    }))
}
