//! Cache-client trait defining the interface to the shared session cache.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// A single write inside a pipelined batch.
///
/// The batch is applied as one ordered round trip. It is not a
/// cross-key transaction: a command can fail while earlier ones have
/// already taken effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheCommand {
    /// Add a member to the set stored at `key`
    SetAdd { key: String, member: String },

    /// Reset the TTL of `key`
    Expire { key: String, seconds: u64 },

    /// Store `value` at `key` with a TTL
    SetWithExpiry {
        key: String,
        value: String,
        seconds: u64,
    },

    /// Remove `key`
    Delete { key: String },
}

/// Interface to the shared key-value session cache.
///
/// This is the engine's only persistence seam. The cache's per-key
/// operations are assumed atomic; the engine takes no in-process locks
/// around them. Implementations must be safe to call from parallel
/// request contexts, and every transport failure must surface as
/// `DomainError::CacheUnavailable` so callers can distinguish retryable
/// infrastructure trouble from final validation failures.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Read the string value stored at `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key absent or expired
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store a string value with a TTL in seconds
    async fn set_with_expiry(&self, key: &str, value: &str, seconds: u64) -> DomainResult<()>;

    /// Remove a key; absent keys are not an error
    async fn delete(&self, key: &str) -> DomainResult<()>;

    /// Whether `key` currently exists
    async fn exists(&self, key: &str) -> DomainResult<bool>;

    /// Read every member of the set stored at `key` without consuming it
    async fn set_members(&self, key: &str) -> DomainResult<Vec<String>>;

    /// Atomically remove and return every member of the set at `key`
    ///
    /// An absent or empty set yields an empty vector.
    async fn set_pop_all(&self, key: &str) -> DomainResult<Vec<String>>;

    /// Apply a batch of writes as one ordered round trip
    async fn run_batch(&self, commands: Vec<CacheCommand>) -> DomainResult<()>;
}
