//! Integration tests against a mock provider

pub mod errors;
pub mod save;
pub mod synthesis;
