//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and alias generation, and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Lookup-or-create of alias records
//! - [`services::redirect_service::RedirectService`] - Alias resolution for redirects

pub mod services;
