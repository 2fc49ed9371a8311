//! src/validation/mod.rs
//!
//! Email typo detection for the sign-up and login forms.
mod email;
pub use email::*;

mod levenshtein;
pub use levenshtein::levenshtein_distance;
