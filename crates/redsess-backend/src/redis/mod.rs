//! Redis adapters

pub mod cluster;
pub mod single;
pub mod universal;

pub use self::cluster::RedisClusterBackend;
pub use self::single::RedisBackend;
pub use self::universal::UniversalBackend;

use std::time::Duration;

use deadpool_redis::PoolConfig;

use redsess_core::BackendError;

/// Bounded wait for a pooled connection.
const POOL_WAIT_TIMEOUT: Duration = Duration::from_secs(3);

fn pool_config(max_connections: usize) -> PoolConfig {
    let mut config = PoolConfig::new(max_connections);
    config.timeouts.wait = Some(POOL_WAIT_TIMEOUT);
    config
}

fn pool_error(err: deadpool_redis::PoolError) -> BackendError {
    match err {
        deadpool_redis::PoolError::Timeout(_) => BackendError::PoolTimeout,
        other => BackendError::Connection(other.to_string()),
    }
}

fn command_error(err: ::redis::RedisError) -> BackendError {
    if err.is_io_error() {
        BackendError::Connection(err.to_string())
    } else {
        BackendError::Command(err.to_string())
    }
}
