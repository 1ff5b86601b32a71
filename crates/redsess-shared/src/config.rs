//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub redis: RedisSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisSettings {
    pub url: String,
    /// Node addresses for cluster mode; empty means single node via `url`.
    #[serde(default)]
    pub cluster_urls: Vec<String>,
    pub max_connections: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub secret: String,
    pub cookie_name: String,
    pub key_prefix: String,
    pub path: String,
    pub domain: String,
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
    /// When set, tokens older than this many seconds are rejected on decode.
    pub token_max_age: Option<i64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("redis.url", "redis://127.0.0.1:6379")?
            .set_default("redis.max_connections", 16)?
            .set_default("session.cookie_name", constants::DEFAULT_COOKIE_NAME)?
            .set_default("session.key_prefix", constants::DEFAULT_KEY_PREFIX)?
            .set_default("session.path", constants::DEFAULT_COOKIE_PATH)?
            .set_default("session.domain", "")?
            .set_default("session.max_age", constants::DEFAULT_MAX_AGE)?
            .set_default("session.secure", false)?
            .set_default("session.http_only", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        // The signing secret has no default on purpose.
        std::env::set_var("SESSION__SECRET", "test-secret-key");
        let config = AppConfig::load().expect("load config");
        std::env::remove_var("SESSION__SECRET");

        assert_eq!(config.session.key_prefix, constants::DEFAULT_KEY_PREFIX);
        assert_eq!(config.session.max_age, constants::DEFAULT_MAX_AGE);
        assert_eq!(config.session.path, "/");
        assert!(config.session.http_only);
        assert!(!config.session.secure);
        assert!(config.redis.cluster_urls.is_empty());
        assert_eq!(config.session.token_max_age, None);
    }
}
