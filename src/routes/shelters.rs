//! src/routes/shelters.rs
use crate::domain::{missing_profile_fields, ShelterProfile};
use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileCompleteness {
    is_complete: bool,
    missing_fields: Vec<&'static str>,
}

/// Reports which required contact details a shelter profile still lacks.
/// A `null` body stands for a shelter without a profile.
#[tracing::instrument(name = "Checking shelter profile completeness", skip(profile))]
pub async fn profile_completeness(profile: web::Json<Option<ShelterProfile>>) -> HttpResponse {
    let profile = profile.into_inner();
    let missing_fields = missing_profile_fields(profile.as_ref());
    HttpResponse::Ok().json(ProfileCompleteness {
        is_complete: missing_fields.is_empty(),
        missing_fields,
    })
}
