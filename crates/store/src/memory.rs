//! In-memory [`KvStore`] used by tests and local development.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::kv::{KvStore, StoreError};

#[derive(Default)]
struct Inner {
    kv: HashMap<String, String>,
    // Sorted sets as (score, member) pairs; ties break on member, which is
    // deterministic even if not meaningful.
    zsets: HashMap<String, BTreeSet<(i64, String)>>,
}

/// Process-local store with the same observable semantics as the Redis
/// backend: per-key consistency, no cross-key atomicity.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().await.kv.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .kv
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        self.inner.write().await.kv.remove(key);
        Ok(())
    }

    async fn zadd(&self, key: &str, member: &str, score: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let zset = inner.zsets.entry(key.to_string()).or_default();
        zset.retain(|(_, m)| m != member);
        zset.insert((score, member.to_string()));
        Ok(())
    }

    async fn zrem(&self, key: &str, member: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(zset) = inner.zsets.get_mut(key) {
            zset.retain(|(_, m)| m != member);
        }
        Ok(())
    }

    async fn zrevrange(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .zsets
            .get(key)
            .map(|zset| zset.iter().rev().map(|(_, m)| m.clone()).collect())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
