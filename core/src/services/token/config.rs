//! Configuration for the token store engine

use crate::domain::entities::SysType;

/// Configuration for the token store engine
#[derive(Debug, Clone)]
pub struct TokenStoreConfig {
    /// Base TTL unit in seconds
    pub base_expiry_seconds: u64,
}

impl Default for TokenStoreConfig {
    fn default() -> Self {
        Self {
            base_expiry_seconds: 3600,
        }
    }
}

impl TokenStoreConfig {
    /// Session lifetime for a caller class, in seconds.
    ///
    /// Every class currently resolves to the same 30-day window; the
    /// match stays keyed by class so the durations can diverge without
    /// touching callers.
    pub fn expires_in(&self, sys_type: SysType) -> u64 {
        match sys_type {
            SysType::Ordinary => self.base_expiry_seconds * 24 * 30,
            SysType::Merchant | SysType::Platform => self.base_expiry_seconds * 24 * 30,
        }
    }
}
