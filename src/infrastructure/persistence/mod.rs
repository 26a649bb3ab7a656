//! Key-value store implementations of the domain repository traits.
//!
//! Each store implements both [`CanonicalRepository`](crate::domain::repositories::CanonicalRepository)
//! and [`RedirectionRepository`](crate::domain::repositories::RedirectionRepository),
//! keeping the two namespaces physically separate.
//!
//! # Stores
//!
//! - [`RedisStore`] - One Redis logical database per namespace
//! - [`MemoryStore`] - Bounded `moka` caches with per-entry TTL, for development and tests

pub mod memory_store;
pub mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
