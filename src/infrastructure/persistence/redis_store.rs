//! Redis implementation of the canonical and redirection namespaces.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager, pipe};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::domain::entities::AliasRecord;
use crate::domain::repositories::{CanonicalRepository, RedirectionRepository};
use crate::error::{StoreError, StoreResult};

const HUMAN_FIELD: &str = "human";
const BOT_FIELD: &str = "bot";

fn map_redis_error(operation: &str, err: RedisError) -> StoreError {
    let message = format!("{operation}: {err}");
    if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StoreError::Connection(message)
    } else {
        StoreError::Command(message)
    }
}

/// Redis takes TTLs as signed seconds; a negative one deletes the key.
fn ttl_arg(ttl_seconds: u64) -> StoreResult<i64> {
    i64::try_from(ttl_seconds)
        .map_err(|_| StoreError::InvalidData(format!("TTL {ttl_seconds}s out of range")))
}

async fn open_manager(redis_url: &str) -> StoreResult<ConnectionManager> {
    let client = Client::open(redis_url).map_err(|e| {
        StoreError::Connection(format!("Failed to create Redis client: {}", e))
    })?;

    let manager = ConnectionManager::new(client)
        .await
        .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

    let mut test_conn = manager.clone();
    test_conn
        .ping::<()>()
        .await
        .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

    Ok(manager)
}

/// Storage client backed by two Redis logical databases.
///
/// The canonical namespace stores each long URL as a hash with `human` and
/// `bot` fields; the redirection namespace stores each alias as a plain
/// string. Connections are `ConnectionManager`s, which multiplex requests
/// and reconnect on failure, so the store can be cloned freely. Dropping
/// the last clone closes both connections.
#[derive(Clone)]
pub struct RedisStore {
    canonical: ConnectionManager,
    redirection: ConnectionManager,
}

impl RedisStore {
    /// Connects both namespaces and validates each with a PING.
    ///
    /// # Arguments
    ///
    /// - `canonical_url` - Redis URL selecting the canonical database (e.g. `redis://host:6379/0`)
    /// - `redirection_url` - Redis URL selecting the redirection database (e.g. `redis://host:6379/1`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if either connection cannot be established.
    pub async fn connect(canonical_url: &str, redirection_url: &str) -> StoreResult<Self> {
        let canonical = open_manager(canonical_url).await?;
        let redirection = open_manager(redirection_url).await?;

        info!("✓ Connected to Redis (canonical + redirection namespaces)");

        Ok(Self {
            canonical,
            redirection,
        })
    }
}

#[async_trait]
impl CanonicalRepository for RedisStore {
    async fn get(&self, long_url: &str) -> StoreResult<Option<AliasRecord>> {
        let mut conn = self.canonical.clone();

        let mut fields: HashMap<String, String> = conn
            .hgetall(long_url)
            .await
            .map_err(|e| map_redis_error("failed to read canonical record", e))?;

        if fields.is_empty() {
            debug!("Canonical MISS: {}", long_url);
            return Ok(None);
        }

        match (fields.remove(HUMAN_FIELD), fields.remove(BOT_FIELD)) {
            (Some(human), Some(bot)) => {
                debug!("Canonical HIT: {} -> {}/{}", long_url, human, bot);
                Ok(Some(AliasRecord { human, bot }))
            }
            _ => {
                warn!("Canonical record for {} is missing fields", long_url);
                Err(StoreError::InvalidData(format!(
                    "canonical record for '{long_url}' lacks human/bot fields"
                )))
            }
        }
    }

    async fn put(
        &self,
        long_url: &str,
        record: &AliasRecord,
        ttl_seconds: u64,
    ) -> StoreResult<()> {
        let ttl = ttl_arg(ttl_seconds)?;
        let mut conn = self.canonical.clone();

        // DEL first so stale fields from an earlier record cannot survive.
        pipe()
            .atomic()
            .del(long_url)
            .ignore()
            .hset_multiple(
                long_url,
                &[(HUMAN_FIELD, &record.human), (BOT_FIELD, &record.bot)],
            )
            .ignore()
            .expire(long_url, ttl)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| map_redis_error("failed to write canonical record", e))?;

        debug!(
            "Canonical SET: {} -> {}/{} (TTL: {}s)",
            long_url, record.human, record.bot, ttl_seconds
        );
        Ok(())
    }

    async fn expire(&self, long_url: &str, ttl_seconds: u64) -> StoreResult<bool> {
        let ttl = ttl_arg(ttl_seconds)?;
        let mut conn = self.canonical.clone();

        conn.expire::<_, bool>(long_url, ttl)
            .await
            .map_err(|e| map_redis_error("failed to refresh canonical TTL", e))
    }

    async fn delete(&self, long_url: &str) -> StoreResult<bool> {
        let mut conn = self.canonical.clone();

        let deleted: i64 = conn
            .del(long_url)
            .await
            .map_err(|e| map_redis_error("failed to delete canonical record", e))?;
        Ok(deleted > 0)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.canonical.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[async_trait]
impl RedirectionRepository for RedisStore {
    async fn get(&self, alias: &str) -> StoreResult<Option<String>> {
        let mut conn = self.redirection.clone();

        let long_url: Option<String> = conn
            .get(alias)
            .await
            .map_err(|e| map_redis_error("failed to read redirection", e))?;

        match &long_url {
            Some(url) => debug!("Redirection HIT: {} -> {}", alias, url),
            None => debug!("Redirection MISS: {}", alias),
        }
        Ok(long_url)
    }

    async fn insert(
        &self,
        record: &AliasRecord,
        long_url: &str,
        ttl_seconds: u64,
    ) -> StoreResult<()> {
        ttl_arg(ttl_seconds)?;
        let mut conn = self.redirection.clone();

        pipe()
            .atomic()
            .set_ex(&record.bot, long_url, ttl_seconds)
            .ignore()
            .set_ex(&record.human, long_url, ttl_seconds)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| map_redis_error("failed to write redirections", e))?;

        debug!(
            "Redirection SET: {}, {} -> {} (TTL: {}s)",
            record.bot, record.human, long_url, ttl_seconds
        );
        Ok(())
    }

    async fn expire(&self, alias: &str, ttl_seconds: u64) -> StoreResult<bool> {
        let ttl = ttl_arg(ttl_seconds)?;
        let mut conn = self.redirection.clone();

        conn.expire::<_, bool>(alias, ttl)
            .await
            .map_err(|e| map_redis_error("failed to refresh redirection TTL", e))
    }

    async fn delete(&self, alias: &str) -> StoreResult<bool> {
        let mut conn = self.redirection.clone();

        let deleted: i64 = conn
            .del(alias)
            .await
            .map_err(|e| map_redis_error("failed to delete redirection", e))?;
        Ok(deleted > 0)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.redirection.clone();
        conn.ping::<()>().await.is_ok()
    }
}
