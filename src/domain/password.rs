//! src/domain/password.rs
use secrecy::{ExposeSecret, Secret};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Empty,
    #[error("Password must be at least 8 characters long.")]
    TooShort,
    #[error("Passwords do not match")]
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, PasswordError> {
        let length = password.expose_secret().chars().count();
        if length == 0 {
            return Err(PasswordError::Empty);
        }
        if length < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort);
        }

        Ok(Self(password))
    }

    pub fn confirm(&self, confirmation: &Secret<String>) -> Result<(), PasswordError> {
        if self.0.expose_secret() == confirmation.expose_secret() {
            Ok(())
        } else {
            Err(PasswordError::Mismatch)
        }
    }
}
