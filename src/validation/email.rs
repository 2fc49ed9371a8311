//! src/validation/email.rs
use super::levenshtein_distance;
use serde::Serialize;

/// Providers an address is checked against for probable typos, in scan order.
pub const COMMON_DOMAINS: [&str; 7] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
];

/// Domains further than this from every common provider are accepted as-is.
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Outcome of checking an email field.
///
/// A failed check is data, not an error: `message` is meant to be shown
/// next to the field as it is typed. `suggestion` holds the corrected
/// address and is only set when the domain looks like a typo of a common
/// provider; it is left out of the JSON otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            ..Default::default()
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            suggestion: None,
        }
    }

    fn did_you_mean(local: &str, domain: &str) -> Self {
        let suggestion = format!("{}@{}", local, domain);
        Self {
            is_valid: false,
            message: format!("Did you mean {}?", suggestion),
            suggestion: Some(suggestion),
        }
    }
}

/// Checks the syntax of `email` and flags domains that look like a
/// misspelling of a common provider.
///
/// An empty input is reported as valid: whether the field is required is
/// the caller's decision. Unknown providers that are not near-misses are
/// accepted.
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::valid();
    }

    if !validator::validate_email(email) {
        return ValidationResult::invalid(INVALID_EMAIL_MESSAGE);
    }

    let domain = match email.rsplit_once('@') {
        Some((_, domain)) if has_top_level_domain(domain) => domain.to_lowercase(),
        _ => return ValidationResult::invalid(INVALID_EMAIL_MESSAGE),
    };

    if COMMON_DOMAINS.contains(&domain.as_str()) {
        return ValidationResult::valid();
    }

    match closest_common_domain(&domain) {
        Some(best_match) => {
            let local = email.split('@').next().unwrap_or_default();
            ValidationResult::did_you_mean(local, best_match)
        }
        None => ValidationResult::valid(),
    }
}

/// `validator` accepts bare hosts such as `gmail` and `[127.0.0.1]`
/// literals; a sign-up address needs `name.tld` with a TLD of two or more
/// characters.
fn has_top_level_domain(domain: &str) -> bool {
    if domain.starts_with('[') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && tld.chars().count() >= 2,
        None => false,
    }
}

/// Returns the common provider closest to `domain`, if it is within
/// [`MAX_SUGGESTION_DISTANCE`]. Ties go to the earliest entry of
/// [`COMMON_DOMAINS`].
pub fn closest_common_domain(domain: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize)> = None;
    for candidate in COMMON_DOMAINS {
        let distance = levenshtein_distance(domain, candidate);
        let current_best = best.map(|(_, d)| d).unwrap_or(usize::MAX);
        if distance <= MAX_SUGGESTION_DISTANCE && distance < current_best {
            best = Some((candidate, distance));
        }
    }

    best.map(|(candidate, _)| candidate)
}
