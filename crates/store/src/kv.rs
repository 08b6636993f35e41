//! The key-value store contract.

use async_trait::async_trait;
use celltrack_core::CoreError;

/// Errors surfaced by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Upstream(err.to_string())
    }
}

/// A mapping store with one sorted-set structure, assumed durable and
/// strongly consistent per key. No cross-key transactions; callers own any
/// multi-key sequencing.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn del(&self, key: &str) -> Result<(), StoreError>;

    /// Add (or re-score) a member in the sorted set at `key`.
    async fn zadd(&self, key: &str, member: &str, score: i64) -> Result<(), StoreError>;

    async fn zrem(&self, key: &str, member: &str) -> Result<(), StoreError>;

    /// All members of the sorted set at `key`, highest score first.
    async fn zrevrange(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Cheap liveness probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
