//! Cache Entry Module
//!
//! Defines individual cache entries and the expiration policy applied on insert.

use std::time::Duration;

use tokio::time::Instant;

// == Expiration ==
/// How long an inserted entry stays alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiration {
    /// Use the default expiration the cache was created with
    #[default]
    Default,
    /// The entry never expires
    Never,
    /// The entry expires this long after insertion
    After(Duration),
}

impl Expiration {
    /// Maps an integer TTL in minutes: positive values expire, anything else never does.
    ///
    /// TTLs too large to express in seconds saturate to `Duration::MAX`.
    pub fn from_minutes(minutes: i64) -> Self {
        if minutes > 0 {
            let ttl = minutes
                .unsigned_abs()
                .checked_mul(60)
                .map_or(Duration::MAX, Duration::from_secs);
            Expiration::After(ttl)
        } else {
            Expiration::Never
        }
    }

    /// Resolves `Default` against the cache default and computes the deadline.
    ///
    /// A zero `After` duration is treated as `Never`, and so is one whose
    /// deadline lies beyond what an `Instant` can represent.
    pub(crate) fn deadline(self, default: Expiration, now: Instant) -> Option<Instant> {
        let resolved = match self {
            Expiration::Default => default,
            other => other,
        };

        match resolved {
            Expiration::After(ttl) if !ttl.is_zero() => now.checked_add(ttl),
            _ => None,
        }
    }
}

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// When the entry was inserted
    pub created_at: Instant,
    /// Absolute expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry inserted at `now`.
    pub fn new(value: String, expiration: Expiration, default: Expiration, now: Instant) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: expiration.deadline(default, now),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at the given instant.
    ///
    /// An entry is expired only once `now` is strictly past its deadline;
    /// an entry without a deadline is never expired.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }

    /// Checks whether the entry is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, or None if no expiration is set.
    ///
    /// Returns `Some(Duration::ZERO)` once the deadline has been reached.
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|expires| expires.saturating_duration_since(Instant::now()))
    }
}
