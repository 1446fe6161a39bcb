//! # ShopGate Core
//!
//! Token lifecycle engine and domain layer for the ShopGate identity
//! services. This crate contains the domain entities, the cache-client
//! seam, the opaque token codec, and the token store engine that issues,
//! validates, refreshes, and revokes bearer-token sessions.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{ProfilePatch, SessionEntry, SysType, TokenInfo, UserSessionPayload};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::session_cache::{CacheCommand, SessionCache};
pub use services::token::{TokenStore, TokenStoreConfig};
