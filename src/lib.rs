//! # Twinlink
//!
//! A URL shortener built with Axum and Redis that issues two aliases per
//! link: a human-readable word slug and a hashed hex token meant for QR
//! codes and machines.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Alias record and repository traits
//! - **Application Layer** ([`application`]) - Shortening, resolution, and expiration logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - HTML form handlers, DTOs, and middleware
//!
//! ## Storage
//!
//! Two namespaces share one sliding TTL:
//!
//! - **canonical**: long URL → `{human, bot}` record
//! - **redirection**: alias → long URL
//!
//! Shortening a known URL or following either alias restarts the window
//! for the long URL and both aliases together.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export DOMAIN="s.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, LinkSettings, RedirectService};
    pub use crate::domain::entities::AliasRecord;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
