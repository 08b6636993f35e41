//! Storage layer: the key-value store abstraction and the record repository.
//!
//! The store contract is deliberately small -- string values by key plus one
//! sorted-set shape -- matching what the tracker actually uses: record bodies
//! at `record:<id>`, a creation-time index at `records:index`, and a
//! secondary `record:doj:<n>` mapping. [`RedisStore`] is the production
//! backend; [`MemoryStore`] backs tests and local development.

pub mod kv;
pub mod memory;
pub mod record_repo;
pub mod redis_store;

pub use kv::{KvStore, StoreError};
pub use memory::MemoryStore;
pub use record_repo::RecordRepo;
pub use redis_store::RedisStore;
