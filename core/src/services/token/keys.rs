//! Cache key formatting for the three token namespaces.
//!
//! The literal prefixes are a wire contract shared with every service
//! reading the same cache population; changing them orphans live
//! sessions.

/// Access-token payload namespace
const ACCESS_PREFIX: &str = "access:";

/// Refresh-token to access-token mapping namespace
const REFRESH_TO_ACCESS_PREFIX: &str = "refresh_to_access:";

/// Per-identity session index namespace
const UID_TO_ACCESS_PREFIX: &str = "uid_to_access:";

/// Key holding the session payload for an access identifier
pub fn access_key(access_id: &str) -> String {
    format!("{}{}", ACCESS_PREFIX, access_id)
}

/// Key mapping a refresh identifier to its access identifier
pub fn refresh_to_access_key(refresh_id: &str) -> String {
    format!("{}{}", REFRESH_TO_ACCESS_PREFIX, refresh_id)
}

/// Key holding an identity's session index set
pub fn uid_to_access_key(approval_key: &str) -> String {
    format!("{}{}", UID_TO_ACCESS_PREFIX, approval_key)
}

/// Composite identity bucket.
///
/// Without a uid this addresses the app-wide bucket; the engine always
/// supplies a uid, the app-wide form is kept for administrative callers.
pub fn approval_key(app_id: &str, uid: Option<i64>) -> String {
    match uid {
        Some(uid) => format!("{}:{}", app_id, uid),
        None => app_id.to_string(),
    }
}
