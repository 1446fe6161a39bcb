//! Token-specific error types
//!
//! These errors represent the validation and lifecycle failures of the
//! opaque session tokens. Error messages are mapped to caller-facing
//! responses in the transport layer.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The caller presented an empty token string.
    #[error("Token is blank")]
    BlankToken,

    /// The token failed to decode, carried an unsafe identifier, or its
    /// embedded issuance timestamp has outlived the class TTL.
    #[error("Invalid token format")]
    MalformedToken,

    /// The token decoded cleanly but no session exists for it. True TTL
    /// expiry and never-issued tokens are indistinguishable here.
    #[error("Token expired or not recognized")]
    ExpiredOrUnknown,

    /// A cross-session update was requested for an identity that has no
    /// live session.
    #[error("No active session for this identity")]
    NoActiveSession,
}
