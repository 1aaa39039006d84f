//! Key-value blob store abstraction
//!
//! The roster persists a single serialized blob under one key. Backends only
//! need to get and set raw bytes; callers decide how to react to failures.

use crate::Result;
use async_trait::async_trait;

/// Async key-value byte storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}
