//! Cache Module
//!
//! Provides an in-process cache partitioned into named collections, keyed by
//! structured values, with lazy TTL expiry and prefix invalidation.

mod clock;
mod entry;
mod finite;
mod key;
mod mode;
mod store;


use std::sync::OnceLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, SharedValue};
pub use key::{canonicalize, CanonicalKey};
pub use mode::{TestMode, PROVIDER_VAR};
pub use store::Cache;

static GLOBAL: OnceLock<Cache> = OnceLock::new();

/// Returns the process-wide cache.
///
/// Reads from it miss whenever `PROVIDER` is set to `test`.
pub fn global() -> &'static Cache {
    GLOBAL.get_or_init(|| {
        Cache::new().with_test_mode(TestMode::FromEnv(PROVIDER_VAR.to_string()))
    })
}
