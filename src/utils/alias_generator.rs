//! Alias generation and collision resolution.
//!
//! Every long URL gets two aliases:
//!
//! - **human** - `n` dictionary words joined by [`SEPARATOR`], drawn at random
//! - **bot** - the first `len` hex characters of SHA-256 over the long URL
//!
//! The bot token is deterministic, so shortening the same URL on a cold store
//! always converges on the same token. Uniqueness is not guaranteed by the
//! generator itself; [`AliasGenerator::resolve_bot`] and
//! [`AliasGenerator::resolve_human`] retry a bounded number of times against
//! the redirection namespace and then accept the last candidate.

use crate::domain::entities::AliasRecord;
use crate::error::StoreResult;
use crate::utils::wordlist::{ADJECTIVES, NOUNS};
use rand::Rng;
use rand::seq::IndexedRandom;
use sha2::{Digest, Sha256};
use std::future::Future;
use tracing::debug;

/// Joins the words of a human slug.
pub const SEPARATOR: &str = "-";

/// Upper bound for the bot token length (hex length of a SHA-256 digest).
pub const MAX_BOT_LENGTH: usize = 64;

/// Upper bound for the number of words in a human slug.
pub const MAX_HUMAN_LENGTH: usize = 6;

/// Builds a slug of `words` words: `words - 1` distinct adjectives and a noun.
///
/// `words` is clamped to `1..=MAX_HUMAN_LENGTH`.
pub fn human_slug<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    let words = words.clamp(1, MAX_HUMAN_LENGTH);

    let mut parts: Vec<&str> = ADJECTIVES
        .choose_multiple(rng, words - 1)
        .copied()
        .collect();
    parts.push(NOUNS[rng.random_range(0..NOUNS.len())]);

    parts.join(SEPARATOR)
}

/// Hashes `input` and returns the first `length` hex characters.
///
/// `length` is clamped to `MAX_BOT_LENGTH`.
pub fn bot_token(input: &str, length: usize) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut token = hex::encode(digest);
    token.truncate(length.min(MAX_BOT_LENGTH));
    token
}

/// Alias generator configured with slug/token lengths and the retry bound.
#[derive(Debug, Clone, Copy)]
pub struct AliasGenerator {
    human_length: usize,
    bot_length: usize,
    collision_fix_times: usize,
}

impl AliasGenerator {
    pub fn new(human_length: usize, bot_length: usize, collision_fix_times: usize) -> Self {
        Self {
            human_length,
            bot_length,
            collision_fix_times,
        }
    }

    /// Produces the initial candidate pair for `long_url`.
    pub fn generate(&self, long_url: &str) -> AliasRecord {
        AliasRecord::new(self.next_human(), bot_token(long_url, self.bot_length))
    }

    fn next_human(&self) -> String {
        human_slug(&mut rand::rng(), self.human_length)
    }

    /// Walks the bot token away from collisions by chaining the hash:
    /// `bot' = H(long_url + bot)`.
    ///
    /// `is_taken` is probed at most `collision_fix_times` times. When every
    /// probe reports a collision the last derived token is returned anyway.
    ///
    /// # Errors
    ///
    /// Propagates errors from `is_taken`.
    pub async fn resolve_bot<F, Fut>(
        &self,
        long_url: &str,
        mut candidate: String,
        mut is_taken: F,
    ) -> StoreResult<String>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = StoreResult<bool>>,
    {
        for attempt in 0..self.collision_fix_times {
            if !is_taken(candidate.clone()).await? {
                return Ok(candidate);
            }
            debug!(attempt, bot = %candidate, "Bot alias collision");
            candidate = bot_token(&format!("{long_url}{candidate}"), self.bot_length);
        }
        Ok(candidate)
    }

    /// Redraws the human slug on collision, with the same bound as
    /// [`Self::resolve_bot`].
    ///
    /// # Errors
    ///
    /// Propagates errors from `is_taken`.
    pub async fn resolve_human<F, Fut>(
        &self,
        mut candidate: String,
        mut is_taken: F,
    ) -> StoreResult<String>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = StoreResult<bool>>,
    {
        for attempt in 0..self.collision_fix_times {
            if !is_taken(candidate.clone()).await? {
                return Ok(candidate);
            }
            debug!(attempt, human = %candidate, "Human alias collision");
            candidate = self.next_human();
        }
        Ok(candidate)
    }
}
