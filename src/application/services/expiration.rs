//! Sliding expiration shared by shortening and redirecting.

use crate::domain::entities::AliasRecord;
use crate::domain::repositories::{CanonicalRepository, RedirectionRepository};
use crate::error::StoreResult;
use tracing::{debug, warn};

/// Resets the TTL of the canonical entry and both redirection entries.
///
/// All three records of a long URL share one window; every access restarts it.
/// Returns `false` if any of the three was no longer live, in which case the
/// record is incomplete and must be rewritten by the caller.
pub(crate) async fn refresh_ttl<C, R>(
    canonical: &C,
    redirection: &R,
    long_url: &str,
    record: &AliasRecord,
    ttl_seconds: u64,
) -> StoreResult<bool>
where
    C: CanonicalRepository + ?Sized,
    R: RedirectionRepository + ?Sized,
{
    let mut complete = canonical.expire(long_url, ttl_seconds).await?;
    for alias in record.aliases() {
        if !redirection.expire(alias, ttl_seconds).await? {
            warn!("Alias '{}' of {} is missing", alias, long_url);
            complete = false;
        }
    }
    debug!("TTL refreshed to {}s for {}", ttl_seconds, long_url);
    Ok(complete)
}
