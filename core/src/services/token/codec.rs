//! Opaque token codec.
//!
//! An exposed token is the base64 of
//! `raw_id(32) || issued_at_millis(13 digits) || sys_type(decimal)`.
//! The cache only ever sees the raw identifier; the embedded timestamp
//! and class tag let the decoder reject stale or mangled tokens without
//! a cache round trip.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::SysType;
use crate::errors::TokenError;

use super::config::TokenStoreConfig;

/// Length of a raw token identifier
pub const RAW_ID_LEN: usize = 32;

/// Fixed width of the embedded issuance timestamp
const TIMESTAMP_LEN: usize = 13;

/// Generate a fresh raw token identifier.
///
/// 32 lowercase hex characters, which keeps every identifier inside the
/// cache-safe `[a-z0-9]` set.
pub fn generate_token_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Encode a raw identifier into the exposed token form
pub fn encode(raw_id: &str, sys_type: SysType) -> String {
    encode_at(raw_id, sys_type, Utc::now().timestamp_millis())
}

pub(crate) fn encode_at(raw_id: &str, sys_type: SysType, issued_at_ms: i64) -> String {
    STANDARD.encode(format!("{}{:013}{}", raw_id, issued_at_ms, sys_type.value()))
}

/// Decode an exposed token back to its raw identifier.
///
/// Fails with `MalformedToken` when the base64 wrapping, the layout, the
/// identifier character set, or the embedded timestamp's age is wrong.
/// The age gate is independent of the cache TTL, so a token that somehow
/// survived in the cache past its class lifetime is still rejected.
pub fn decode(exposed: &str, policy: &TokenStoreConfig) -> Result<String, TokenError> {
    let bytes = STANDARD
        .decode(exposed)
        .map_err(|_| TokenError::MalformedToken)?;
    let plain = String::from_utf8(bytes).map_err(|_| TokenError::MalformedToken)?;
    if !plain.is_ascii() || plain.len() <= RAW_ID_LEN + TIMESTAMP_LEN {
        return Err(TokenError::MalformedToken);
    }

    let raw_id = &plain[..RAW_ID_LEN];
    let issued_at_ms: i64 = plain[RAW_ID_LEN..RAW_ID_LEN + TIMESTAMP_LEN]
        .parse()
        .map_err(|_| TokenError::MalformedToken)?;
    let sys_value: i32 = plain[RAW_ID_LEN + TIMESTAMP_LEN..]
        .parse()
        .map_err(|_| TokenError::MalformedToken)?;
    let sys_type = SysType::from_value(sys_value).ok_or(TokenError::MalformedToken)?;

    let age_ms = Utc::now().timestamp_millis() - issued_at_ms;
    if age_ms > policy.expires_in(sys_type) as i64 * 1000 {
        return Err(TokenError::MalformedToken);
    }

    // A decoded identifier must never carry delimiter or control
    // characters into the cache keyspace.
    if !is_safe_token_id(raw_id) {
        return Err(TokenError::MalformedToken);
    }

    Ok(raw_id.to_string())
}

fn is_safe_token_id(id: &str) -> bool {
    id.len() == RAW_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_fixed_length_and_safe() {
        let id = generate_token_id();
        assert_eq!(id.len(), RAW_ID_LEN);
        assert!(is_safe_token_id(&id));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(generate_token_id(), generate_token_id());
    }
}
