//! Rack Cache - An in-process, collection-scoped TTL cache
//!
//! Memoizes results of slow external calls under structured keys, with lazy
//! expiry, exact-key invalidation and string-prefix invalidation. A small
//! HTTP surface exposes one cache of JSON values for inspection and purging.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::Cache;
pub use config::Config;
pub use error::{CacheError, Result};
