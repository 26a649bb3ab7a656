//! Repository trait for the canonical namespace.

use crate::domain::entities::AliasRecord;
use crate::error::StoreResult;
use async_trait::async_trait;

/// Storage mapping a long URL to its [`AliasRecord`].
///
/// Every entry is TTL-governed. An entry whose TTL has elapsed behaves
/// exactly like one that never existed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CanonicalRepository: Send + Sync {
    /// Returns the live record for `long_url`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`](crate::error::StoreError) when the backend fails.
    async fn get(&self, long_url: &str) -> StoreResult<Option<AliasRecord>>;

    /// Writes (or overwrites) the record for `long_url`, expiring after
    /// `ttl_seconds`.
    ///
    /// The record and its TTL are written together; no entry is ever left
    /// without one.
    async fn put(
        &self,
        long_url: &str,
        record: &AliasRecord,
        ttl_seconds: u64,
    ) -> StoreResult<()>;

    /// Resets the remaining TTL of `long_url` to `ttl_seconds`.
    ///
    /// Returns `false` when no live entry exists.
    async fn expire(&self, long_url: &str, ttl_seconds: u64) -> StoreResult<bool>;

    /// Removes the record for `long_url`. Returns `true` if it existed.
    async fn delete(&self, long_url: &str) -> StoreResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
