//! Repository trait definitions for the domain layer.
//!
//! The service keeps two logically separate key-value namespaces, each
//! behind its own trait so every lookup and TTL refresh names the namespace
//! it targets:
//!
//! - [`CanonicalRepository`] - long URL to [`AliasRecord`](crate::domain::entities::AliasRecord)
//! - [`RedirectionRepository`] - alias to long URL
//!
//! # Implementations
//!
//! - `crate::infrastructure::persistence::RedisStore` - two Redis logical databases
//! - `crate::infrastructure::persistence::MemoryStore` - in-process maps with TTL
//! - Mock implementations are auto-generated via `mockall` for unit tests

pub mod canonical_repository;
pub mod redirection_repository;

pub use canonical_repository::CanonicalRepository;
pub use redirection_repository::RedirectionRepository;

#[cfg(test)]
pub use canonical_repository::MockCanonicalRepository;
#[cfg(test)]
pub use redirection_repository::MockRedirectionRepository;
