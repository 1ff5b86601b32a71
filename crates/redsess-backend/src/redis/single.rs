//! Single-node Redis backend

use async_trait::async_trait;
use deadpool_redis::{Config, Pool, Runtime};
use redis::AsyncCommands;

use redsess_core::{BackendError, SessionBackend};

use super::{command_error, pool_config, pool_error};

/// Session backend over one Redis node with a shared connection pool.
pub struct RedisBackend {
    pool: Pool,
}

impl RedisBackend {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Build a pooled backend for `url` with a bounded acquire wait.
    pub fn connect(url: &str, max_connections: usize) -> Result<Self, BackendError> {
        let mut cfg = Config::from_url(url);
        cfg.pool = Some(pool_config(max_connections));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl SessionBackend for RedisBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        conn.get(key).await.map_err(command_error)
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &[u8],
        ttl_seconds: i64,
    ) -> Result<(), BackendError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        if ttl_seconds > 0 {
            conn.set_ex::<_, _, ()>(key, value, ttl_seconds as u64)
                .await
                .map_err(command_error)
        } else {
            conn.set::<_, _, ()>(key, value).await.map_err(command_error)
        }
    }

    async fn delete(&self, key: &str) -> Result<(), BackendError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        // DEL of an absent key returns 0, not an error.
        conn.del::<_, i64>(key)
            .await
            .map(|_| ())
            .map_err(command_error)
    }

    async fn exists(&self, key: &str) -> Result<bool, BackendError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        conn.exists(key).await.map_err(command_error)
    }
}
