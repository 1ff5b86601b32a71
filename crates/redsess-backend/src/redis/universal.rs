//! Configuration-driven backend selection

use async_trait::async_trait;

use redsess_core::{BackendError, SessionBackend};
use redsess_shared::config::RedisSettings;

use super::{RedisBackend, RedisClusterBackend};

/// Single-node or cluster backend chosen from configuration: cluster when
/// node addresses are listed, single node otherwise.
pub enum UniversalBackend {
    Single(RedisBackend),
    Cluster(RedisClusterBackend),
}

impl UniversalBackend {
    pub fn connect(settings: &RedisSettings) -> Result<Self, BackendError> {
        if settings.cluster_urls.is_empty() {
            Ok(Self::Single(RedisBackend::connect(
                &settings.url,
                settings.max_connections,
            )?))
        } else {
            Ok(Self::Cluster(RedisClusterBackend::connect(
                settings.cluster_urls.clone(),
                settings.max_connections,
            )?))
        }
    }
}

#[async_trait]
impl SessionBackend for UniversalBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        match self {
            Self::Single(backend) => backend.get(key).await,
            Self::Cluster(backend) => backend.get(key).await,
        }
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &[u8],
        ttl_seconds: i64,
    ) -> Result<(), BackendError> {
        match self {
            Self::Single(backend) => backend.set_with_ttl(key, value, ttl_seconds).await,
            Self::Cluster(backend) => backend.set_with_ttl(key, value, ttl_seconds).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), BackendError> {
        match self {
            Self::Single(backend) => backend.delete(key).await,
            Self::Cluster(backend) => backend.delete(key).await,
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, BackendError> {
        match self {
            Self::Single(backend) => backend.exists(key).await,
            Self::Cluster(backend) => backend.exists(key).await,
        }
    }
}
