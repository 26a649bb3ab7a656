//! Alias record lookup-or-create service.

use std::sync::Arc;

use crate::application::services::expiration::refresh_ttl;
use crate::domain::entities::AliasRecord;
use crate::domain::repositories::{CanonicalRepository, RedirectionRepository};
use crate::error::{AppError, StoreResult};
use crate::utils::alias_generator::AliasGenerator;
use crate::utils::self_link::SelfLinkMatcher;
use tracing::{debug, info, warn};

/// Immutable settings shared by the link and redirect services.
#[derive(Debug, Clone)]
pub struct LinkSettings {
    /// TTL in seconds applied to all three entries of a long URL on every access.
    pub expiration_time: u64,
    pub bot_length: usize,
    pub human_length: usize,
    pub collision_fix_times: usize,
    /// Public host of this service, e.g. `s.example.com`.
    pub domain: String,
}

/// Service for shortening URLs.
///
/// Owns the canonical-vs-redirection bookkeeping: one [`AliasRecord`] per
/// long URL in the canonical namespace, two alias entries pointing back at
/// it in the redirection namespace, all three sharing one sliding TTL.
pub struct LinkService<C: ?Sized, R: ?Sized> {
    canonical: Arc<C>,
    redirection: Arc<R>,
    generator: AliasGenerator,
    self_links: SelfLinkMatcher,
    expiration_time: u64,
    domain: String,
}

impl<C, R> LinkService<C, R>
where
    C: CanonicalRepository + ?Sized,
    R: RedirectionRepository + ?Sized,
{
    /// Creates a new link service.
    ///
    /// # Errors
    ///
    /// Returns an error if the self-link pattern for `settings.domain`
    /// cannot be compiled.
    pub fn new(
        canonical: Arc<C>,
        redirection: Arc<R>,
        settings: LinkSettings,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            canonical,
            redirection,
            generator: AliasGenerator::new(
                settings.human_length,
                settings.bot_length,
                settings.collision_fix_times,
            ),
            self_links: SelfLinkMatcher::new(&settings.domain)?,
            expiration_time: settings.expiration_time,
            domain: settings.domain,
        })
    }

    /// Returns the alias record for `input_url`, creating it on first use.
    ///
    /// # Flow
    ///
    /// 1. If the input is one of our own short links, resolve its alias first
    ///    and continue with the URL behind it
    /// 2. Reuse the canonical record when one is live, refreshing the TTL of
    ///    all three entries
    /// 3. If any of the three has gone missing, rewrite the record keeping
    ///    whichever aliases are still free
    /// 4. Otherwise generate aliases, retry collisions, and write both
    ///    redirections followed by the canonical record, all with the TTL
    ///
    /// A failed write leaves at most alias entries pointing at the long URL,
    /// which expire on their own and never count as collisions for it.
    ///
    /// Two concurrent first requests for the same URL may both create a
    /// record; the last canonical write wins and the other alias pair
    /// expires on its own.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if a self-referential alias is unknown
    /// or expired.
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    pub async fn shorten_or_fetch(&self, input_url: &str) -> Result<AliasRecord, AppError> {
        let long_url = self.effective_long_url(input_url).await?;

        let Some(existing) = self.canonical.get(&long_url).await? else {
            let candidate = self.generator.generate(&long_url);
            return self.write_record(&long_url, candidate).await;
        };

        let complete = refresh_ttl(
            self.canonical.as_ref(),
            self.redirection.as_ref(),
            &long_url,
            &existing,
            self.expiration_time,
        )
        .await?;

        if complete {
            debug!("Reusing aliases for {}", long_url);
            Ok(existing)
        } else {
            warn!("Record for {} is incomplete, rewriting it", long_url);
            self.write_record(&long_url, existing).await
        }
    }

    /// Removes the record of `long_url` and the aliases that point at it.
    ///
    /// Aliases that have since been taken over by another URL are left alone.
    /// Returns `false` when `long_url` has no live record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage errors.
    pub async fn forget(&self, long_url: &str) -> Result<bool, AppError> {
        let Some(record) = self.canonical.get(long_url).await? else {
            return Ok(false);
        };

        for alias in record.aliases() {
            if self.redirection.get(alias).await?.as_deref() == Some(long_url) {
                self.redirection.delete(alias).await?;
            }
        }
        self.canonical.delete(long_url).await?;

        info!("Forgot {} ({}, {})", long_url, record.human, record.bot);
        Ok(true)
    }

    /// Constructs the full short URL for an alias.
    ///
    /// Always uses HTTPS protocol.
    pub fn short_url(&self, alias: &str) -> String {
        format!("https://{}/{}", self.domain, alias)
    }

    /// Public host this service answers on.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    async fn effective_long_url(&self, input_url: &str) -> Result<String, AppError> {
        let Some(alias) = self.self_links.alias(input_url) else {
            return Ok(input_url.to_string());
        };

        debug!("Input {} is a self link, resolving alias '{}'", input_url, alias);
        self.redirection
            .get(alias)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Alias '{}' not found", alias)))
    }

    async fn write_record(
        &self,
        long_url: &str,
        candidate: AliasRecord,
    ) -> Result<AliasRecord, AppError> {
        let bot = self
            .generator
            .resolve_bot(long_url, candidate.bot, move |alias| {
                self.alias_taken(alias, long_url)
            })
            .await?;
        let human = self
            .generator
            .resolve_human(candidate.human, move |alias| {
                self.alias_taken(alias, long_url)
            })
            .await?;

        let record = AliasRecord { human, bot };

        self.redirection
            .insert(&record, long_url, self.expiration_time)
            .await?;
        self.canonical
            .put(long_url, &record, self.expiration_time)
            .await?;

        info!(
            "Stored aliases {} and {} for {}",
            record.human, record.bot, long_url
        );
        Ok(record)
    }

    /// An alias collides when it is live and points at a different URL.
    async fn alias_taken(&self, alias: String, long_url: &str) -> StoreResult<bool> {
        Ok(self
            .redirection
            .get(&alias)
            .await?
            .is_some_and(|target| target != long_url))
    }
}
