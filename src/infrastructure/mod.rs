//! Infrastructure layer for external integrations.
//!
//! This layer implements the storage traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Redis and in-memory repository implementations

pub mod persistence;
