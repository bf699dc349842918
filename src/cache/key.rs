//! Key canonicalization
//!
//! Any serializable key is reduced to a compact JSON string. The value goes
//! through [`serde_json::Value`] first, whose objects keep their fields sorted,
//! so structurally equal keys always produce the same bytes.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::finite;
use crate::error::{CacheError, Result};

// == Canonical Key ==
/// Canonical encoding of a caller-supplied key. Always valid JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    #[cfg(test)]
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the key back into an untyped JSON value.
    pub fn decode(&self) -> Result<Value> {
        serde_json::from_str(&self.0).map_err(CacheError::Decode)
    }

    /// Returns true if the key decodes to a JSON string starting with `prefix`.
    pub fn has_string_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(matches!(self.decode()?, Value::String(s) if s.starts_with(prefix)))
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Canonicalize ==
/// Encodes `key` into its canonical form.
///
/// Fails with [`CacheError::Encode`] when the key cannot be represented as
/// JSON, e.g. a map whose keys are not strings or a NaN/infinite float.
pub fn canonicalize<K>(key: &K) -> Result<CanonicalKey>
where
    K: Serialize + ?Sized,
{
    finite::check(key).map_err(CacheError::Encode)?;
    let value = serde_json::to_value(key).map_err(CacheError::Encode)?;
    serde_json::to_string(&value)
        .map(CanonicalKey)
        .map_err(CacheError::Encode)
}
