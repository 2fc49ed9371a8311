//! src/domain/name.rs
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("{0} is required")]
    Empty(&'static str),
    #[error("{0} must not be more than 256 characters long")]
    TooLong(&'static str),
    #[error("{0} must not contain any of the following characters: '/' '(' ')' '\"' '<' '>' '\\' '{{' '}}'")]
    InvalidCharacters(&'static str),
}

/// Adopter full name or shelter name.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayName(String);

impl DisplayName {
    /// `label` names the field in error messages.
    pub fn parse(s: String, label: &'static str) -> Result<Self, NameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NameError::Empty(label));
        }

        // `å` is a single grapheme made of two chars, count what the user sees.
        if trimmed.graphemes(true).count() > 256 {
            return Err(NameError::TooLong(label));
        }

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        if trimmed.chars().any(|c| forbidden_characters.contains(&c)) {
            return Err(NameError::InvalidCharacters(label));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
