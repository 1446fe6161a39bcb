//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ShopGate
//! identity services. It provides the Redis-backed implementation of
//! the session cache seam defined in `sg_core`.

// Re-export core types for convenience
pub use sg_core::errors::*;

/// Cache module - Redis session cache
pub mod cache;

/// Load the session cache configuration from the environment
///
/// Reads a `.env` file when present, then the `REDIS_URL` and
/// `REDIS_MAX_CONNECTIONS` variables.
pub fn load_cache_config() -> sg_shared::CacheConfig {
    dotenvy::dotenv().ok();
    sg_shared::CacheConfig::from_env()
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
