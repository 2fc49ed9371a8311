mod errors;
mod helpers;
mod registrations;
