//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`AliasRecord`] - The `human`/`bot` alias pair owned by one long URL

pub mod alias_record;

pub use alias_record::AliasRecord;
