//! HTTP layer: the shortening form, redirects, and health checks.
//!
//! # Modules
//!
//! - [`dto`] - Form and response payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
