//! In-memory implementation of SessionCache for testing

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::DomainResult;

use super::r#trait::{CacheCommand, SessionCache};

/// In-memory session cache for tests.
///
/// TTLs are accepted but never enforced; a test simulates expiry by
/// deleting the key directly.
#[derive(Clone)]
pub struct InMemorySessionCache {
    values: Arc<RwLock<HashMap<String, String>>>,
    sets: Arc<RwLock<HashMap<String, HashSet<String>>>>,
}

impl InMemorySessionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
            sets: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemorySessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn set_with_expiry(&self, key: &str, value: &str, _seconds: u64) -> DomainResult<()> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<()> {
        self.values.write().await.remove(key);
        self.sets.write().await.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        if self.values.read().await.contains_key(key) {
            return Ok(true);
        }
        Ok(self.sets.read().await.contains_key(key))
    }

    async fn set_members(&self, key: &str) -> DomainResult<Vec<String>> {
        let sets = self.sets.read().await;
        Ok(sets
            .get(key)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn set_pop_all(&self, key: &str) -> DomainResult<Vec<String>> {
        let mut sets = self.sets.write().await;
        Ok(sets
            .remove(key)
            .map(|members| members.into_iter().collect())
            .unwrap_or_default())
    }

    async fn run_batch(&self, commands: Vec<CacheCommand>) -> DomainResult<()> {
        for command in commands {
            match command {
                CacheCommand::SetAdd { key, member } => {
                    let mut sets = self.sets.write().await;
                    sets.entry(key).or_default().insert(member);
                }
                CacheCommand::Expire { .. } => {
                    // TTLs are not simulated
                }
                CacheCommand::SetWithExpiry { key, value, .. } => {
                    let mut values = self.values.write().await;
                    values.insert(key, value);
                }
                CacheCommand::Delete { key } => {
                    self.values.write().await.remove(&key);
                    self.sets.write().await.remove(&key);
                }
            }
        }
        Ok(())
    }
}
