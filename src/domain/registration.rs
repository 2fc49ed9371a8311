//! src/domain/registration.rs
use crate::domain::{AccountEmail, DisplayName, Password};
use crate::error_messages::field_label;
use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// Shelters registering without a country are assumed to be in Pakistan.
pub const DEFAULT_SHELTER_COUNTRY: &str = "Pakistan";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Adopter,
    Shelter,
}

/// Sign-up form as submitted by adopters and shelters. Adopters fill in
/// `full_name`, shelters fill in `name`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub account_type: AccountType,
    pub full_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: Option<Secret<String>>,
    pub confirm_password: Option<Secret<String>>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, error: impl std::fmt::Display) -> Self {
        Self {
            field,
            message: error.to_string(),
        }
    }
}

/// Every field that failed, in form order. The per-field messages are the
/// user-facing text; `Display` only summarises.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("The registration form has invalid fields")]
pub struct RegistrationError {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: Option<String>,
}

#[derive(Debug)]
pub struct NewAccount {
    pub account_type: AccountType,
    pub name: DisplayName,
    pub email: AccountEmail,
    pub password: Password,
    pub phone: Option<String>,
    pub location: Location,
}

impl NewAccount {
    /// Usernames are the email local part suffixed with the sign-up time in
    /// milliseconds.
    pub fn username(&self, now: DateTime<Utc>) -> String {
        format!("{}_{}", self.email.local_part(), now.timestamp_millis())
    }
}

impl TryFrom<RegistrationForm> for NewAccount {
    type Error = RegistrationError;

    fn try_from(form: RegistrationForm) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let (name_field, raw_name) = match form.account_type {
            AccountType::Adopter => ("full_name", form.full_name),
            AccountType::Shelter => ("name", form.name),
        };
        let name = collect(
            DisplayName::parse(raw_name, field_label(name_field)),
            name_field,
            &mut errors,
        );

        let email = collect(AccountEmail::parse(form.email), "email", &mut errors);

        let password = collect(
            Password::parse(form.password.unwrap_or_else(|| Secret::new(String::new()))),
            "password",
            &mut errors,
        );
        if let Some(password) = &password {
            let confirmation = form
                .confirm_password
                .unwrap_or_else(|| Secret::new(String::new()));
            collect(password.confirm(&confirmation), "confirm_password", &mut errors);
        }

        let city = required(form.city, "city", &mut errors);
        let state = required(form.state, "state", &mut errors);
        let zip_code = required(form.zip_code, "zip_code", &mut errors);

        let country = optional(form.country).or_else(|| match form.account_type {
            AccountType::Shelter => Some(DEFAULT_SHELTER_COUNTRY.to_string()),
            AccountType::Adopter => None,
        });

        match (name, email, password, city, state, zip_code) {
            (Some(name), Some(email), Some(password), Some(city), Some(state), Some(zip_code))
                if errors.is_empty() =>
            {
                Ok(Self {
                    account_type: form.account_type,
                    name,
                    email,
                    password,
                    phone: optional(form.phone),
                    location: Location {
                        city,
                        state,
                        zip_code,
                        country,
                    },
                })
            }
            _ => Err(RegistrationError { errors }),
        }
    }
}

fn collect<T, E: std::fmt::Display>(
    result: Result<T, E>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    result.map_err(|e| errors.push(FieldError::new(field, e))).ok()
}

fn required(value: String, field: &'static str, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = optional(value);
    if value.is_none() {
        errors.push(FieldError::new(
            field,
            format!("{} is required", field_label(field)),
        ));
    }
    value
}

fn optional(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
