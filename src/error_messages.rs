//! src/error_messages.rs
//!
//! Turns error payloads returned by the marketplace backend into sentences
//! that can be shown to adopters and shelters.
use serde_json::Value;

pub const DEFAULT_MESSAGE: &str = "Something went wrong. Please try again.";

/// Human readable label for a form field name.
pub fn field_label(field: &str) -> &str {
    match field {
        "email" => "Email address",
        "password" => "Password",
        "username" => "Username",
        "full_name" => "Full name",
        "phone" => "Phone number",
        "city" => "City",
        "state" => "State",
        "zip_code" => "Postal code",
        "country" => "Country",
        "name" => "Name",
        "address" => "Address",
        other => other,
    }
}

/// Translates a backend error payload.
///
/// `detail` may be a list of field errors (`{"loc": [...], "msg": "..."}`)
/// or a plain string; a top-level `message` string is treated like a
/// `detail` string. Anything else yields `default`.
#[tracing::instrument(name = "Translating a backend error", skip(default), level = "debug")]
pub fn friendly_error(payload: Option<&Value>, default: &str) -> String {
    let payload = match payload {
        Some(payload) if !payload.is_null() => payload,
        _ => return default.to_string(),
    };

    match payload.get("detail") {
        Some(Value::Array(items)) => {
            let messages: Vec<String> = items.iter().map(field_error_sentence).collect();
            if messages.is_empty() {
                default.to_string()
            } else {
                messages.join(". ")
            }
        }
        Some(Value::String(detail)) if !detail.is_empty() => detail_sentence(detail),
        _ => match payload.get("message") {
            Some(Value::String(message)) if !message.is_empty() => detail_sentence(message),
            _ => default.to_string(),
        },
    }
}

fn field_error_sentence(item: &Value) -> String {
    let field = match item.get("loc").and_then(|loc| loc.as_array()).and_then(|loc| loc.last()) {
        Some(Value::String(field)) if !field.is_empty() => field.clone(),
        Some(Value::Number(index)) => index.to_string(),
        _ => "field".to_string(),
    };
    let msg = item.get("msg").and_then(Value::as_str).unwrap_or_default();
    let label = field_label(&field);

    if msg.contains("field required") {
        format!("{} is required", label)
    } else if msg.contains("string does not match") {
        format!("{} format is invalid", label)
    } else if msg.contains("value is not a valid") {
        format!("Please enter a valid {}", label.to_lowercase())
    } else if msg.contains("ensure this value has at least") {
        format!("{} is too short", label)
    } else if msg.contains("ensure this value has at most") {
        format!("{} is too long", label)
    } else {
        format!("{}: {}", label, msg)
    }
}

fn detail_sentence(detail: &str) -> String {
    let lowered = detail.to_lowercase();
    let contains = |needle: &str| lowered.contains(needle);

    let sentence = if contains("already exists") || contains("already registered") {
        "An account with this email already exists. Please try logging in instead."
    } else if contains("email") {
        "Please enter a valid email address."
    } else if contains("password") {
        "Password must be at least 8 characters long."
    } else if contains("invalid") && contains("credentials") {
        "Invalid email or password. Please check your credentials and try again."
    } else if contains("not found") {
        "Account not found. Please check your email address."
    } else if contains("unauthorized") || contains("not authenticated") {
        "Please log in to continue."
    } else if contains("forbidden") || contains("permission") {
        "You don't have permission to perform this action."
    } else if contains("timeout") || contains("timed out") {
        "The request took too long. Please check your connection and try again."
    } else if contains("constraint") {
        "The information you entered conflicts with existing data. Please check and try again."
    } else if contains("an error occurred") {
        "Something went wrong. Please try again in a moment."
    } else {
        detail
    };

    sentence.to_string()
}

/// Ways a request to the backend can fail before any payload arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFailure {
    Timeout,
    Unreachable,
    Other,
}

impl NetworkFailure {
    /// Classifies a transport error from its name and message.
    pub fn classify(name: &str, message: &str) -> Self {
        if name == "AbortError" {
            NetworkFailure::Timeout
        } else if message.contains("Failed to fetch") || message.contains("NetworkError") {
            NetworkFailure::Unreachable
        } else {
            NetworkFailure::Other
        }
    }
}

pub fn network_error(failure: NetworkFailure) -> &'static str {
    match failure {
        NetworkFailure::Timeout => {
            "The request took too long. Please check your connection and try again."
        }
        NetworkFailure::Unreachable => {
            "Unable to connect to the server. Please check your internet connection and try again."
        }
        NetworkFailure::Other => "Connection failed. Please check your internet and try again.",
    }
}
