//! src/domain/mod.rs
mod email;
pub use email::{AccountEmail, EmailError};

mod name;
pub use name::{DisplayName, NameError};

mod password;
pub use password::{Password, PasswordError, MIN_PASSWORD_LENGTH};

mod registration;
pub use registration::*;

mod shelter_profile;
pub use shelter_profile::*;
