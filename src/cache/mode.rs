//! Test-mode switch that turns every read into a miss.

use std::env;

/// Environment variable consulted by the process-wide cache.
pub const PROVIDER_VAR: &str = "PROVIDER";

/// Value of the switch variable that disables reads.
const TEST_VALUE: &str = "test";

/// Controls whether reads bypass the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TestMode {
    /// Normal operation
    #[default]
    Off,
    /// Every read misses
    On,
    /// Reads miss while the named variable equals `test`; checked on every read
    FromEnv(String),
}

impl TestMode {
    /// Returns true when reads should report absent.
    pub fn is_active(&self) -> bool {
        match self {
            TestMode::Off => false,
            TestMode::On => true,
            TestMode::FromEnv(var) => env::var(var).is_ok_and(|v| v == TEST_VALUE),
        }
    }
}
