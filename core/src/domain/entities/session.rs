//! Session payload entities shared by every token lifecycle operation.

use serde::{Deserialize, Serialize};

/// Caller class discriminator.
///
/// Selects the TTL policy for a session and scopes the per-identity
/// session bucket. The decimal value is part of the cache wire contract
/// and of the opaque token layout, so the mapping must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SysType {
    /// An ordinary storefront end-user
    Ordinary,
    /// A merchant-shop administrator
    Merchant,
    /// A platform administrator
    Platform,
}

impl SysType {
    /// Decimal tag embedded in tokens and cache keys
    pub fn value(self) -> i32 {
        match self {
            SysType::Ordinary => 0,
            SysType::Merchant => 1,
            SysType::Platform => 2,
        }
    }

    /// Reverse mapping from the decimal tag
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(SysType::Ordinary),
            1 => Some(SysType::Merchant),
            2 => Some(SysType::Platform),
            _ => None,
        }
    }

    /// Application scope used when bucketing an identity's sessions
    pub fn app_id(self) -> String {
        self.value().to_string()
    }
}

/// The session payload stored in the cache under an access key.
///
/// Written at issuance and at bulk profile update, read on every
/// validation. Everything downstream authorization needs must be in
/// here, since the cache is the only session state there is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSessionPayload {
    /// Logical identity across all subsystems
    pub uid: i64,

    /// Caller class of the session
    pub sys_type: SysType,

    /// Per-subsystem account identifier
    pub user_id: Option<String>,

    /// Tenant the account belongs to
    pub tenant_id: Option<i64>,

    /// Merchant shop linkage, when the caller class has one
    pub shop_id: Option<i64>,

    /// Display name carried for convenience
    pub nickname: Option<String>,

    /// Whether the account holds administrative rights in its scope
    pub is_admin: Option<bool>,
}

impl UserSessionPayload {
    /// Creates a minimal payload for an identity
    pub fn new(uid: i64, sys_type: SysType) -> Self {
        Self {
            uid,
            sys_type,
            user_id: None,
            tenant_id: None,
            shop_id: None,
            nickname: None,
            is_admin: None,
        }
    }

    /// Returns a copy of this payload with the patch's populated fields
    /// overwriting the stored ones.
    ///
    /// The identity (`uid`, `sys_type`) is never patched; a profile
    /// update cannot move a session to another identity or caller class.
    pub fn merged(&self, patch: &ProfilePatch) -> UserSessionPayload {
        let mut updated = self.clone();
        if let Some(user_id) = &patch.user_id {
            updated.user_id = Some(user_id.clone());
        }
        if let Some(tenant_id) = patch.tenant_id {
            updated.tenant_id = Some(tenant_id);
        }
        if let Some(shop_id) = patch.shop_id {
            updated.shop_id = Some(shop_id);
        }
        if let Some(nickname) = &patch.nickname {
            updated.nickname = Some(nickname.clone());
        }
        if let Some(is_admin) = patch.is_admin {
            updated.is_admin = Some(is_admin);
        }
        updated
    }
}

/// Partial profile update applied across an identity's live sessions.
///
/// Unset fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub user_id: Option<String>,
    pub tenant_id: Option<i64>,
    pub shop_id: Option<i64>,
    pub nickname: Option<String>,
    pub is_admin: Option<bool>,
}
