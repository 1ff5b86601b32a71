//! Clustered Redis backend

use async_trait::async_trait;
use deadpool_redis::cluster::{Config, Pool};
use deadpool_redis::Runtime;
use redis::{ErrorKind, FromRedisValue, RedisError};
use tracing::debug;

use redsess_core::{BackendError, SessionBackend};

use super::{command_error, pool_config, pool_error};

/// How many times a transiently misrouted command is retried before the
/// error surfaces.
const MAX_ROUTING_RETRIES: u32 = 3;

/// Session backend over a sharded Redis cluster.
///
/// Key routing lives entirely in the cluster client; the store never learns
/// which node served a key. Transient routing errors (slot moved,
/// resharding in progress) are retried a bounded number of times before
/// surfacing as [`BackendError::RoutingExhausted`].
pub struct RedisClusterBackend {
    pool: Pool,
}

impl RedisClusterBackend {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Build a pooled backend for the cluster nodes at `urls`.
    pub fn connect(urls: Vec<String>, max_connections: usize) -> Result<Self, BackendError> {
        let mut cfg = Config::from_urls(urls);
        cfg.pool = Some(pool_config(max_connections));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    async fn run<T: FromRedisValue>(&self, cmd: &redis::Cmd) -> Result<T, BackendError> {
        let mut attempt = 0;
        loop {
            let mut conn = self.pool.get().await.map_err(pool_error)?;
            match cmd.query_async::<T>(&mut conn).await {
                Ok(value) => return Ok(value),
                Err(e) if is_transient(&e) => {
                    if attempt >= MAX_ROUTING_RETRIES {
                        return Err(BackendError::RoutingExhausted(e.to_string()));
                    }
                    attempt += 1;
                    debug!(
                        "Transient cluster error ({}), retry {}/{}",
                        e, attempt, MAX_ROUTING_RETRIES
                    );
                }
                Err(e) => return Err(command_error(e)),
            }
        }
    }
}

/// Routing errors the cluster heals on its own shortly.
fn is_transient(err: &RedisError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::Moved
            | ErrorKind::Ask
            | ErrorKind::TryAgain
            | ErrorKind::ClusterDown
            | ErrorKind::MasterDown
    )
}

#[async_trait]
impl SessionBackend for RedisClusterBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        self.run(redis::cmd("GET").arg(key)).await
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &[u8],
        ttl_seconds: i64,
    ) -> Result<(), BackendError> {
        if ttl_seconds > 0 {
            self.run::<()>(redis::cmd("SET").arg(key).arg(value).arg("EX").arg(ttl_seconds as u64))
                .await
        } else {
            self.run::<()>(redis::cmd("SET").arg(key).arg(value)).await
        }
    }

    async fn delete(&self, key: &str) -> Result<(), BackendError> {
        // DEL of an absent key returns 0, not an error.
        self.run::<i64>(redis::cmd("DEL").arg(key)).await.map(|_| ())
    }

    async fn exists(&self, key: &str) -> Result<bool, BackendError> {
        self.run(redis::cmd("EXISTS").arg(key)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_errors_are_transient() {
        for kind in [
            ErrorKind::Moved,
            ErrorKind::Ask,
            ErrorKind::TryAgain,
            ErrorKind::ClusterDown,
            ErrorKind::MasterDown,
        ] {
            let err = RedisError::from((kind, "routing"));
            assert!(is_transient(&err), "{:?} should be retried", kind);
        }
    }

    #[test]
    fn test_hard_errors_are_not_transient() {
        for kind in [ErrorKind::TypeError, ErrorKind::AuthenticationFailed] {
            let err = RedisError::from((kind, "hard"));
            assert!(!is_transient(&err), "{:?} must surface at once", kind);
        }
    }
}
