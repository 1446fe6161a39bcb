//! Token entities for the opaque-token session scheme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Token pair handed back to the login flow.
///
/// Both tokens are in the exposed (encoded) form; the raw identifiers
/// never leave the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Opaque access token validating requests
    pub access_token: String,

    /// Single-use opaque token exchanged for a fresh pair
    pub refresh_token: String,

    /// Lifetime of both tokens in seconds
    pub expires_in: u64,
}

/// A member of the per-identity session index set.
///
/// Serialized as `access_id:refresh_id`. An entry may outlive the access
/// key it points at; staleness is detected lazily at issuance time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    /// Raw access token identifier
    pub access_id: String,

    /// Raw refresh token identifier
    pub refresh_id: String,
}

impl SessionEntry {
    /// Creates an entry for a freshly issued pair
    pub fn new(access_id: impl Into<String>, refresh_id: impl Into<String>) -> Self {
        Self {
            access_id: access_id.into(),
            refresh_id: refresh_id.into(),
        }
    }
}

impl fmt::Display for SessionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.access_id, self.refresh_id)
    }
}

/// Error returned when a stored index member does not carry both halves
/// of a token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry;

impl FromStr for SessionEntry {
    type Err = MalformedEntry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (access_id, refresh_id) = s.split_once(':').ok_or(MalformedEntry)?;
        if access_id.is_empty() || refresh_id.is_empty() {
            return Err(MalformedEntry);
        }
        Ok(Self::new(access_id, refresh_id))
    }
}
