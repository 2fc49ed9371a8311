pub mod configuration;
pub mod domain;
pub mod error_messages;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod validation;
