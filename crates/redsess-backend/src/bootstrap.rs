//! Store wiring from configuration

use std::sync::Arc;

use redsess_core::{SessionOptions, SessionStore};
use redsess_security::TokenCodec;
use redsess_shared::{AppConfig, AppError};

use crate::UniversalBackend;

/// Wire a ready-to-use session store from loaded configuration: backend
/// topology, signed token codec, key prefix, and default cookie options.
///
/// Pool connections are established lazily on first use.
pub fn store_from_config(config: &AppConfig) -> Result<SessionStore<UniversalBackend>, AppError> {
    let backend = UniversalBackend::connect(&config.redis)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let mut codec = TokenCodec::new(config.session.secret.clone());
    if let Some(max_age) = config.session.token_max_age {
        codec = codec.with_max_age(max_age);
    }

    let mut store = SessionStore::new(Arc::new(backend), codec);
    store.key_prefix(config.session.key_prefix.clone());
    store.options(SessionOptions {
        path: config.session.path.clone(),
        domain: config.session.domain.clone(),
        max_age: config.session.max_age,
        secure: config.session.secure,
        http_only: config.session.http_only,
    });
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redsess_shared::config::{RedisSettings, SessionSettings};

    fn test_config() -> AppConfig {
        AppConfig {
            redis: RedisSettings {
                url: "redis://127.0.0.1:6379".to_string(),
                cluster_urls: Vec::new(),
                max_connections: 4,
            },
            session: SessionSettings {
                secret: "bootstrap-secret".to_string(),
                cookie_name: "sid".to_string(),
                key_prefix: "app:".to_string(),
                path: "/app".to_string(),
                domain: "example.com".to_string(),
                max_age: 600,
                secure: true,
                http_only: true,
                token_max_age: Some(3600),
            },
        }
    }

    #[tokio::test]
    async fn test_store_carries_configured_defaults() {
        let store = store_from_config(&test_config()).expect("wire store");
        let handle = store.new_session(None, "sid").await;
        assert!(handle.is_new);
        assert_eq!(handle.options.path, "/app");
        assert_eq!(handle.options.domain, "example.com");
        assert_eq!(handle.options.max_age, 600);
        assert!(handle.options.secure);
    }

    #[tokio::test]
    async fn test_cluster_urls_select_cluster_backend() {
        let mut config = test_config();
        config.redis.cluster_urls = vec![
            "redis://127.0.0.1:7000".to_string(),
            "redis://127.0.0.1:7001".to_string(),
        ];
        let store = store_from_config(&config).expect("wire cluster store");
        // Pools are lazy, so wiring succeeds without reachable nodes.
        let handle = store.new_session(None, "sid").await;
        assert!(handle.is_new);
    }
}
