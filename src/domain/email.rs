//! src/domain/email.rs
use crate::validation::validate_email;
use serde::Serialize;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email address is required")]
    Empty,
    /// Malformed, or a probable typo of a common provider.
    #[error("{0}")]
    Rejected(String),
}

/// An address that passed syntax and typo checks.
#[derive(Debug, Clone, Serialize)]
pub struct AccountEmail(String);

impl AccountEmail {
    pub fn parse(s: String) -> Result<Self, EmailError> {
        let s = s.trim().to_string();
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        let result = validate_email(&s);
        if result.is_valid {
            Ok(Self(s))
        } else {
            Err(EmailError::Rejected(result.message))
        }
    }

    /// Everything before the first `@`.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }
}

impl AsRef<str> for AccountEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
