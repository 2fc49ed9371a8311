//! src/routes/mod.rs
mod health_check;
pub use health_check::*;

mod emails;
pub use emails::*;

mod registrations;
pub use registrations::*;

mod errors;
pub use errors::*;

mod shelters;
pub use shelters::*;
