//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Opaque, shared handle to a caller-owned value.
pub type SharedValue = Arc<dyn Any + Send + Sync>;

// == Cache Entry ==
/// Represents a single cache entry with value and deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value, held by reference
    pub value: SharedValue,
    /// When the entry was stored
    pub created_at: Instant,
    /// Expiration instant, None = the deadline overflowed the clock
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped at `now` that expires `ttl` later.
    pub fn new(value: SharedValue, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now.checked_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired only once the deadline is
    /// strictly before `now`; at the deadline itself it is still fresh.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}
