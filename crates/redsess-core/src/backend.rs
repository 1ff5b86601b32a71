//! Session backend port (trait)

use async_trait::async_trait;

use crate::error::BackendError;

/// Uniform capability set over the key-value backend, whether a single node,
/// a sharded cluster, or an in-memory map.
///
/// Implementations own connection pooling and, in cluster mode, key routing;
/// both are invisible to the store. They must be safe for concurrent use by
/// many request tasks, and connection acquisition must respect a bounded
/// timeout surfaced as [`BackendError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Fetch the record stored under `key`. An absent key is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError>;

    /// Store `value` under `key`. A positive `ttl_seconds` sets backend
    /// expiry; zero or negative stores without expiry. The session store
    /// never passes a non-positive TTL (it deletes instead).
    async fn set_with_ttl(
        &self,
        key: &str,
        value: &[u8],
        ttl_seconds: i64,
    ) -> Result<(), BackendError>;

    /// Remove `key`. Idempotent: deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), BackendError>;

    async fn exists(&self, key: &str) -> Result<bool, BackendError>;
}
