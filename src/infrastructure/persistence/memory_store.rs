//! In-memory implementation of both namespaces, built on `moka`.
//!
//! Each value carries its own TTL, read by a per-entry [`Expiry`] policy.
//! An expired entry reads as absent and is evicted by the cache's background
//! maintenance whether or not it is accessed again. `expire` re-inserts the
//! live value so the policy restarts its clock.

use async_trait::async_trait;
use moka::future::Cache;
use moka::policy::Expiry;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::entities::AliasRecord;
use crate::domain::repositories::{CanonicalRepository, RedirectionRepository};
use crate::error::StoreResult;

/// Default upper bound on entries per namespace.
pub const DEFAULT_MAX_CAPACITY: u64 = 100_000;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    ttl: Duration,
}

impl<V> Entry<V> {
    fn new(value: V, ttl_seconds: u64) -> Self {
        Self {
            value,
            ttl: Duration::from_secs(ttl_seconds),
        }
    }
}

/// Expires every entry `ttl` after its last write. Reads leave the deadline alone.
struct EntryExpiry;

impl<V> Expiry<String, Entry<V>> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry<V>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

type Namespace<V> = Cache<String, Entry<V>>;

fn namespace<V>(max_capacity: u64) -> Namespace<V>
where
    V: Clone + Send + Sync + 'static,
{
    Cache::builder()
        .max_capacity(max_capacity)
        .expire_after(EntryExpiry)
        .build()
}

async fn set_ttl<V>(namespace: &Namespace<V>, key: &str, ttl_seconds: u64) -> bool
where
    V: Clone + Send + Sync + 'static,
{
    match namespace.get(key).await {
        Some(entry) => {
            namespace
                .insert(key.to_string(), Entry::new(entry.value, ttl_seconds))
                .await;
            true
        }
        None => false,
    }
}

async fn remove<V>(namespace: &Namespace<V>, key: &str) -> bool
where
    V: Clone + Send + Sync + 'static,
{
    let live = namespace.get(key).await.is_some();
    namespace.invalidate(key).await;
    live
}

/// Process-local store holding the canonical and redirection namespaces.
pub struct MemoryStore {
    canonical: Namespace<AliasRecord>,
    redirection: Namespace<String>,
}

impl MemoryStore {
    /// Creates an empty store holding up to [`DEFAULT_MAX_CAPACITY`] entries
    /// per namespace.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    /// Creates an empty store holding up to `max_capacity` entries per namespace.
    pub fn with_capacity(max_capacity: u64) -> Self {
        debug!(
            "Using MemoryStore (data is not persisted), max capacity: {}",
            max_capacity
        );
        Self {
            canonical: namespace(max_capacity),
            redirection: namespace(max_capacity),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CanonicalRepository for MemoryStore {
    async fn get(&self, long_url: &str) -> StoreResult<Option<AliasRecord>> {
        Ok(self.canonical.get(long_url).await.map(|entry| entry.value))
    }

    async fn put(
        &self,
        long_url: &str,
        record: &AliasRecord,
        ttl_seconds: u64,
    ) -> StoreResult<()> {
        self.canonical
            .insert(long_url.to_string(), Entry::new(record.clone(), ttl_seconds))
            .await;
        Ok(())
    }

    async fn expire(&self, long_url: &str, ttl_seconds: u64) -> StoreResult<bool> {
        Ok(set_ttl(&self.canonical, long_url, ttl_seconds).await)
    }

    async fn delete(&self, long_url: &str) -> StoreResult<bool> {
        Ok(remove(&self.canonical, long_url).await)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[async_trait]
impl RedirectionRepository for MemoryStore {
    async fn get(&self, alias: &str) -> StoreResult<Option<String>> {
        Ok(self.redirection.get(alias).await.map(|entry| entry.value))
    }

    async fn insert(
        &self,
        record: &AliasRecord,
        long_url: &str,
        ttl_seconds: u64,
    ) -> StoreResult<()> {
        for alias in record.aliases() {
            self.redirection
                .insert(alias.to_string(), Entry::new(long_url.to_string(), ttl_seconds))
                .await;
        }
        Ok(())
    }

    async fn expire(&self, alias: &str, ttl_seconds: u64) -> StoreResult<bool> {
        Ok(set_ttl(&self.redirection, alias, ttl_seconds).await)
    }

    async fn delete(&self, alias: &str) -> StoreResult<bool> {
        Ok(remove(&self.redirection, alias).await)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com";

    fn record() -> AliasRecord {
        AliasRecord::new("brave-quiet-otter", "1a2b3c4d")
    }

    #[tokio::test]
    async fn test_canonical_put_and_get() {
        let store = MemoryStore::new();
        CanonicalRepository::put(&store, URL, &record(), 60)
            .await
            .unwrap();

        let found = CanonicalRepository::get(&store, URL).await.unwrap();
        assert_eq!(found, Some(record()));
    }

    #[tokio::test]
    async fn test_redirection_insert_writes_both_aliases() {
        let store = MemoryStore::new();
        RedirectionRepository::insert(&store, &record(), URL, 60)
            .await
            .unwrap();

        for alias in ["brave-quiet-otter", "1a2b3c4d"] {
            let url = RedirectionRepository::get(&store, alias).await.unwrap();
            assert_eq!(url.as_deref(), Some(URL));
        }
    }

    #[tokio::test]
    async fn test_namespaces_are_independent() {
        let store = MemoryStore::new();
        CanonicalRepository::put(&store, "1a2b3c4d", &record(), 60)
            .await
            .unwrap();

        assert!(
            RedirectionRepository::get(&store, "1a2b3c4d")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let store = MemoryStore::new();
        CanonicalRepository::put(&store, URL, &record(), 1)
            .await
            .unwrap();

        assert!(CanonicalRepository::get(&store, URL).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(1_500)).await;

        assert!(CanonicalRepository::get(&store, URL).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expire_restarts_the_window() {
        let store = MemoryStore::new();
        RedirectionRepository::insert(&store, &record(), URL, 2)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1_200)).await;
        assert!(
            RedirectionRepository::expire(&store, "1a2b3c4d", 2)
                .await
                .unwrap()
        );

        tokio::time::sleep(Duration::from_millis(1_200)).await;

        // Past the original deadline: only the refreshed alias survives.
        assert_eq!(
            RedirectionRepository::get(&store, "1a2b3c4d")
                .await
                .unwrap()
                .as_deref(),
            Some(URL)
        );
        assert!(
            RedirectionRepository::get(&store, "brave-quiet-otter")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_expired_entries_are_evicted_without_being_read() {
        let store = MemoryStore::new();
        CanonicalRepository::put(&store, URL, &record(), 1)
            .await
            .unwrap();
        RedirectionRepository::insert(&store, &record(), URL, 1)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        store.canonical.run_pending_tasks().await;
        store.redirection.run_pending_tasks().await;

        assert_eq!(store.canonical.entry_count(), 0);
        assert_eq!(store.redirection.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let store = MemoryStore::with_capacity(10);
        for i in 0..100 {
            CanonicalRepository::put(&store, &format!("https://example.com/{i}"), &record(), 60)
                .await
                .unwrap();
        }

        store.canonical.run_pending_tasks().await;

        assert!(store.canonical.entry_count() <= 10);
    }

    #[tokio::test]
    async fn test_expire_on_expired_entry_reports_missing() {
        let store = MemoryStore::new();
        RedirectionRepository::insert(&store, &record(), URL, 1)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1_500)).await;

        assert!(
            !RedirectionRepository::expire(&store, "1a2b3c4d", 10)
                .await
                .unwrap()
        );
        assert!(
            !RedirectionRepository::delete(&store, "1a2b3c4d")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_expire_missing_key() {
        let store = MemoryStore::new();
        assert!(
            !CanonicalRepository::expire(&store, "https://nowhere.example", 60)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        CanonicalRepository::put(&store, URL, &record(), 60)
            .await
            .unwrap();

        assert!(CanonicalRepository::delete(&store, URL).await.unwrap());
        assert!(!CanonicalRepository::delete(&store, URL).await.unwrap());
    }
}
