//! Cache Store Module
//!
//! Main cache engine: collection name -> canonical key -> entry, guarded by
//! a single mutex. Expiry is lazy; expired entries stay in place until they
//! are overwritten or cleared.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::cache::{
    canonicalize, CacheEntry, CanonicalKey, Clock, SharedValue, SystemClock, TestMode,
};
use crate::error::{CacheError, Result};

type Collection = HashMap<CanonicalKey, CacheEntry>;

// == Cache ==
/// Collection-scoped TTL cache, safe to share across threads.
pub struct Cache {
    /// Collection name -> entries; one lock covers every operation
    collections: Mutex<HashMap<String, Collection>>,
    /// Source of "now" for deadlines
    clock: Arc<dyn Clock>,
    /// Whether reads are switched off
    test_mode: TestMode,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache on the system clock with test mode off.
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            clock: Arc::new(SystemClock),
            test_mode: TestMode::Off,
        }
    }

    /// Replaces the clock used for deadlines.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the test-mode switch.
    pub fn with_test_mode(mut self, test_mode: TestMode) -> Self {
        self.test_mode = test_mode;
        self
    }

    // == Get ==
    /// Returns the value stored under `key`, if fresh and of type `T`.
    ///
    /// A value of another type reads as absent. Encode failures read as
    /// absent too.
    pub fn get<T, K>(&self, collection: &str, key: &K) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
        K: Serialize + ?Sized,
    {
        self.get_any(collection, key)?.downcast::<T>().ok()
    }

    /// Returns the untyped value stored under `key`, if fresh.
    pub fn get_any<K>(&self, collection: &str, key: &K) -> Option<SharedValue>
    where
        K: Serialize + ?Sized,
    {
        if self.test_mode.is_active() {
            trace!(collection, "test mode active, bypassing cache");
            return None;
        }

        let key = match canonicalize(key) {
            Ok(key) => key,
            Err(err) => {
                trace!(collection, error = %err, "unencodable key treated as miss");
                return None;
            }
        };

        let collections = self.collections.lock();
        let entry = collections.get(collection)?.get(&key)?;

        if entry.is_expired(self.clock.now()) {
            trace!(collection, key = %key, "expired");
            return None;
        }

        trace!(collection, key = %key, "hit");
        Some(entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`, replacing any previous entry.
    pub fn set<K, V>(&self, collection: &str, key: &K, value: V, ttl: Duration) -> Result<()>
    where
        K: Serialize + ?Sized,
        V: Any + Send + Sync,
    {
        self.insert(collection, key, Arc::new(value), ttl)
    }

    /// Stores an already shared value; the caller keeps its handle and
    /// observes the same allocation on later reads.
    pub fn set_shared<K, V>(
        &self,
        collection: &str,
        key: &K,
        value: Arc<V>,
        ttl: Duration,
    ) -> Result<()>
    where
        K: Serialize + ?Sized,
        V: Any + Send + Sync,
    {
        self.insert(collection, key, value, ttl)
    }

    fn insert<K>(&self, collection: &str, key: &K, value: SharedValue, ttl: Duration) -> Result<()>
    where
        K: Serialize + ?Sized,
    {
        let key = canonicalize(key)?;

        let mut collections = self.collections.lock();
        let entry = CacheEntry::new(value, self.clock.now(), ttl);
        debug!(collection, key = %key, ttl = ?ttl, "set");
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key, entry);

        Ok(())
    }

    // == Get Or Insert ==
    /// Returns the cached value, or runs `fetch` and caches its result.
    ///
    /// `fetch` runs without the lock held, so concurrent misses on the same
    /// key may both fetch; the last one to finish wins the slot.
    pub fn get_or_try_insert_with<K, V, E, F>(
        &self,
        collection: &str,
        key: &K,
        ttl: Duration,
        fetch: F,
    ) -> std::result::Result<Arc<V>, E>
    where
        K: Serialize + ?Sized,
        V: Any + Send + Sync,
        E: From<CacheError>,
        F: FnOnce() -> std::result::Result<V, E>,
    {
        if let Some(value) = self.get::<V, K>(collection, key) {
            return Ok(value);
        }

        let value = Arc::new(fetch()?);
        self.set_shared(collection, key, value.clone(), ttl)?;
        Ok(value)
    }

    // == Clear ==
    /// Removes the entry under `key`. Missing keys are not an error.
    pub fn clear<K>(&self, collection: &str, key: &K) -> Result<()>
    where
        K: Serialize + ?Sized,
    {
        let key = canonicalize(key)?;

        let mut collections = self.collections.lock();
        if let Some(entries) = collections.get_mut(collection) {
            if entries.remove(&key).is_some() {
                debug!(collection, key = %key, "cleared");
            }
        }

        Ok(())
    }

    // == Clear Prefix ==
    /// Removes every entry whose key is a string starting with `prefix`.
    ///
    /// Keys of any other shape are kept. Stops at the first key that fails
    /// to decode and returns [`CacheError::Decode`]; removals made before
    /// that point stand.
    pub fn clear_prefix(&self, collection: &str, prefix: &str) -> Result<()> {
        let mut collections = self.collections.lock();
        let Some(entries) = collections.get_mut(collection) else {
            return Ok(());
        };

        let before = entries.len();
        let mut failure = None;
        entries.retain(|key, _| {
            if failure.is_some() {
                return true;
            }
            match key.has_string_prefix(prefix) {
                Ok(matched) => !matched,
                Err(err) => {
                    failure = Some(err);
                    true
                }
            }
        });

        debug!(
            collection,
            prefix,
            removed = before - entries.len(),
            "cleared prefix"
        );

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    // == Length ==
    /// Number of slots held for `collection`, expired ones included.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .get(collection)
            .map_or(0, HashMap::len)
    }

    // == Is Empty ==
    /// Returns true if `collection` holds no slots.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("collections", &self.collections.lock().len())
            .field("test_mode", &self.test_mode)
            .finish_non_exhaustive()
    }
}
