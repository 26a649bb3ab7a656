//! Alias resolution service used by the redirect endpoint.

use std::sync::Arc;

use crate::application::services::expiration::refresh_ttl;
use crate::domain::repositories::{CanonicalRepository, RedirectionRepository};
use crate::error::AppError;
use tracing::warn;

/// Service resolving aliases to long URLs.
///
/// Every successful resolution restarts the shared TTL window, so links in
/// active use never expire while idle ones age out.
pub struct RedirectService<C: ?Sized, R: ?Sized> {
    canonical: Arc<C>,
    redirection: Arc<R>,
    expiration_time: u64,
}

impl<C, R> RedirectService<C, R>
where
    C: CanonicalRepository + ?Sized,
    R: RedirectionRepository + ?Sized,
{
    /// Creates a new redirect service.
    pub fn new(canonical: Arc<C>, redirection: Arc<R>, expiration_time: u64) -> Self {
        Self {
            canonical,
            redirection,
            expiration_time,
        }
    }

    /// Resolves `alias` to its long URL and refreshes the record's TTL.
    ///
    /// If the canonical record has already disappeared (see the create race
    /// in [`LinkService`](crate::application::services::LinkService)), only
    /// the alias that was used is refreshed and the redirect still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias never existed or has expired.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        let long_url = self
            .redirection
            .get(alias)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Alias '{}' not found", alias)))?;

        match self.canonical.get(&long_url).await? {
            Some(record) => {
                refresh_ttl(
                    self.canonical.as_ref(),
                    self.redirection.as_ref(),
                    &long_url,
                    &record,
                    self.expiration_time,
                )
                .await?;
            }
            None => {
                warn!("Alias '{}' points at {} which has no record", alias, long_url);
                self.redirection.expire(alias, self.expiration_time).await?;
            }
        }

        Ok(long_url)
    }
}
