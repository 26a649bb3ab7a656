//! Data Transfer Objects for HTTP requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for input
//! validation.

pub mod health;
pub mod shorten;
