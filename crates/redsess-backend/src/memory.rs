//! In-memory backend
//!
//! Expiry is lazy: an expired entry is removed the next time it is read.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use dashmap::DashMap;

use redsess_core::{BackendError, SessionBackend};

struct Entry {
    value: Vec<u8>,
    expires_at_ms: u64, // 0 none
}

impl Entry {
    fn is_expired(&self, now: u64) -> bool {
        self.expires_at_ms != 0 && now >= self.expires_at_ms
    }
}

/// DashMap-backed [`SessionBackend`] for tests and development.
#[derive(Default)]
pub struct MemoryBackend {
    map: DashMap<String, Entry>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        let now = Self::now_ms();
        let Some(entry) = self.map.get(key) else {
            return Ok(None);
        };
        if entry.is_expired(now) {
            drop(entry);
            self.map.remove(key);
            return Ok(None);
        }
        Ok(Some(entry.value.clone()))
    }

    async fn set_with_ttl(
        &self,
        key: &str,
        value: &[u8],
        ttl_seconds: i64,
    ) -> Result<(), BackendError> {
        let expires_at_ms = if ttl_seconds > 0 {
            Self::now_ms() + (ttl_seconds as u64) * 1000
        } else {
            0
        };
        self.map.insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                expires_at_ms,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), BackendError> {
        self.map.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, BackendError> {
        let now = Self::now_ms();
        match self.map.get(key) {
            Some(entry) if entry.is_expired(now) => {
                drop(entry);
                self.map.remove(key);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }
}
