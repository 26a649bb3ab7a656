//! Repository trait for the redirection namespace.

use crate::domain::entities::AliasRecord;
use crate::error::StoreResult;
use async_trait::async_trait;

/// Storage mapping each alias string to the long URL it resolves to.
///
/// Both aliases of an [`AliasRecord`] always point at the same long URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectionRepository: Send + Sync {
    /// Returns the long URL behind `alias`, if the alias is live.
    async fn get(&self, alias: &str) -> StoreResult<Option<String>>;

    /// Writes both `record.human -> long_url` and `record.bot -> long_url`
    /// in a single round trip, each expiring after `ttl_seconds`.
    async fn insert(
        &self,
        record: &AliasRecord,
        long_url: &str,
        ttl_seconds: u64,
    ) -> StoreResult<()>;

    /// Resets the remaining TTL of `alias` to `ttl_seconds`.
    ///
    /// Returns `false` when no live entry exists.
    async fn expire(&self, alias: &str, ttl_seconds: u64) -> StoreResult<bool>;

    /// Removes `alias`. Returns `true` if it existed.
    async fn delete(&self, alias: &str) -> StoreResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
