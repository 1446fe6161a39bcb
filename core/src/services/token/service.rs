//! Token store engine orchestrating the session lifecycle.

use tracing::{debug, info, warn};

use crate::domain::entities::{ProfilePatch, SessionEntry, TokenInfo, UserSessionPayload};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::session_cache::{CacheCommand, SessionCache};

use super::codec;
use super::config::TokenStoreConfig;
use super::keys;

/// Token lifecycle engine over the shared session cache.
///
/// The engine holds no mutable state of its own; every operation is a
/// sequence of cache round trips keyed by the identity it concerns, so
/// one instance serves any number of parallel request contexts.
pub struct TokenStore<C: SessionCache> {
    cache: C,
    config: TokenStoreConfig,
}

impl<C: SessionCache> TokenStore<C> {
    /// Creates a new token store over a cache client
    pub fn new(cache: C, config: TokenStoreConfig) -> Self {
        Self { cache, config }
    }

    /// The TTL policy this store was built with
    pub fn config(&self) -> &TokenStoreConfig {
        &self.config
    }

    /// Issues a fresh access/refresh pair for an identity and records it
    /// in the cache.
    ///
    /// Every login for an identity lands in the same index set, so the
    /// set is re-read here and members whose access key has lapsed are
    /// dropped. There is no background sweep; this is the only place
    /// stale members are pruned.
    ///
    /// # Returns
    ///
    /// The encoded token pair together with its lifetime in seconds.
    pub async fn issue_tokens(&self, payload: &UserSessionPayload) -> DomainResult<TokenInfo> {
        let access_id = codec::generate_token_id();
        let refresh_id = codec::generate_token_id();
        let expires_in = self.config.expires_in(payload.sys_type);

        let index_key = self.index_key_for(&payload.sys_type.app_id(), Some(payload.uid));

        let mut entries = vec![SessionEntry::new(&access_id, &refresh_id).to_string()];
        for member in self.cache.set_pop_all(&index_key).await? {
            let entry = match member.parse::<SessionEntry>() {
                Ok(entry) => entry,
                Err(_) => {
                    warn!(uid = payload.uid, "dropping malformed session index member");
                    continue;
                }
            };
            if self.cache.exists(&keys::access_key(&entry.access_id)).await? {
                entries.push(member);
            }
        }

        let payload_json = serialize_payload(payload)?;

        // One round trip for the three writes; the liveness reads above
        // are not part of it, so a session revoked in between may be
        // written back once and pruned on the next issuance.
        let mut batch = Vec::with_capacity(entries.len() + 3);
        for entry in &entries {
            batch.push(CacheCommand::SetAdd {
                key: index_key.clone(),
                member: entry.clone(),
            });
        }
        batch.push(CacheCommand::Expire {
            key: index_key,
            seconds: expires_in,
        });
        batch.push(CacheCommand::SetWithExpiry {
            key: keys::refresh_to_access_key(&refresh_id),
            value: access_id.clone(),
            seconds: expires_in,
        });
        batch.push(CacheCommand::SetWithExpiry {
            key: keys::access_key(&access_id),
            value: payload_json,
            seconds: expires_in,
        });
        self.cache.run_batch(batch).await?;

        debug!(
            uid = payload.uid,
            sys_type = payload.sys_type.value(),
            live_sessions = entries.len(),
            "issued session token pair"
        );

        Ok(TokenInfo {
            access_token: codec::encode(&access_id, payload.sys_type),
            refresh_token: codec::encode(&refresh_id, payload.sys_type),
            expires_in,
        })
    }

    /// Validates an exposed access token and returns the session payload.
    ///
    /// A cache miss reports `ExpiredOrUnknown` whether the session
    /// expired or the token was never issued; the two cases are not
    /// distinguished for the caller.
    pub async fn verify_access_token(
        &self,
        access_token: &str,
    ) -> DomainResult<UserSessionPayload> {
        if access_token.trim().is_empty() {
            return Err(TokenError::BlankToken.into());
        }

        let access_id = codec::decode(access_token, &self.config)?;
        self.load_payload(&access_id)
            .await?
            .ok_or_else(|| TokenError::ExpiredOrUnknown.into())
    }

    /// Exchanges a refresh token for a wholly new pair.
    ///
    /// The old pair is fully retired before the new one exists, so a
    /// replayed refresh token misses immediately and there is no window
    /// in which both pairs validate.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> DomainResult<TokenInfo> {
        if refresh_token.trim().is_empty() {
            return Err(TokenError::BlankToken.into());
        }

        let refresh_id = codec::decode(refresh_token, &self.config)?;
        let refresh_key = keys::refresh_to_access_key(&refresh_id);

        let access_id = self
            .cache
            .get(&refresh_key)
            .await?
            .ok_or(TokenError::ExpiredOrUnknown)?;

        let payload = self
            .load_payload(&access_id)
            .await?
            .ok_or(TokenError::ExpiredOrUnknown)?;

        self.cache.delete(&refresh_key).await?;
        self.cache.delete(&keys::access_key(&access_id)).await?;

        self.issue_tokens(&payload).await
    }

    /// Revokes every session belonging to an identity.
    ///
    /// Deletion is explicit and immediate; no TTL is relied upon. An
    /// empty index is an idempotent no-op.
    pub async fn revoke_user_sessions(&self, app_id: &str, uid: i64) -> DomainResult<()> {
        let index_key = self.index_key_for(app_id, Some(uid));

        let members = self.cache.set_pop_all(&index_key).await?;
        if members.is_empty() {
            return Ok(());
        }

        for member in &members {
            let entry = match member.parse::<SessionEntry>() {
                Ok(entry) => entry,
                Err(_) => {
                    warn!(app_id, uid, "skipping malformed session index member");
                    continue;
                }
            };
            self.cache
                .delete(&keys::refresh_to_access_key(&entry.refresh_id))
                .await?;
            self.cache.delete(&keys::access_key(&entry.access_id)).await?;
        }
        self.cache.delete(&index_key).await?;

        info!(
            app_id,
            uid,
            sessions = members.len(),
            "revoked all sessions for identity"
        );
        Ok(())
    }

    /// Propagates a profile update to every live session of an identity.
    ///
    /// Fails with `NoActiveSession` when the identity has no session at
    /// all, which callers may treat as a precondition violation. Members
    /// whose access key no longer resolves are skipped, not pruned;
    /// pruning is reserved for issuance.
    pub async fn update_user_sessions(
        &self,
        app_id: &str,
        uid: i64,
        patch: &ProfilePatch,
    ) -> DomainResult<()> {
        let index_key = self.index_key_for(app_id, Some(uid));

        let members = self.cache.set_members(&index_key).await?;
        if members.is_empty() {
            return Err(TokenError::NoActiveSession.into());
        }

        let mut updated = 0usize;
        for member in members {
            let entry = match member.parse::<SessionEntry>() {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            let payload = match self.load_payload(&entry.access_id).await? {
                Some(payload) => payload,
                None => continue,
            };

            let merged = payload.merged(patch);
            let payload_json = serialize_payload(&merged)?;
            self.cache
                .set_with_expiry(
                    &keys::access_key(&entry.access_id),
                    &payload_json,
                    self.config.expires_in(merged.sys_type),
                )
                .await?;
            updated += 1;
        }

        debug!(app_id, uid, sessions = updated, "propagated profile update");
        Ok(())
    }

    /// Loads a session payload by raw access identifier, bypassing the
    /// codec. Used internally where the identifier is already raw.
    async fn load_payload(&self, access_id: &str) -> DomainResult<Option<UserSessionPayload>> {
        match self.cache.get(&keys::access_key(access_id)).await? {
            Some(json) => {
                let payload =
                    serde_json::from_str(&json).map_err(|e| DomainError::Internal {
                        message: format!("Failed to deserialize session payload: {}", e),
                    })?;
                Ok(Some(payload))
            }
            None => Ok(None),
        }
    }

    fn index_key_for(&self, app_id: &str, uid: Option<i64>) -> String {
        keys::uid_to_access_key(&keys::approval_key(app_id, uid))
    }
}

fn serialize_payload(payload: &UserSessionPayload) -> DomainResult<String> {
    serde_json::to_string(payload).map_err(|e| DomainError::Internal {
        message: format!("Failed to serialize session payload: {}", e),
    })
}
