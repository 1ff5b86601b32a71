//! Session lifecycle store

use std::sync::Arc;

use tracing::{debug, warn};

use redsess_security::{generate_session_id, TokenCodec};
use redsess_shared::constants::DEFAULT_KEY_PREFIX;

use crate::backend::SessionBackend;
use crate::domain::{CookieDirective, SessionHandle, SessionOptions, SessionValues};
use crate::error::StoreError;
use crate::key::session_key;

/// Orchestrates the session lifecycle against an injected backend.
///
/// `key_prefix` and the default options are store-owned configuration.
/// Changing them affects handles issued afterwards; handles already in
/// flight keep the options they were issued with, and records already
/// persisted are left to expire under their original keys.
pub struct SessionStore<B: SessionBackend> {
    backend: Arc<B>,
    codec: TokenCodec,
    key_prefix: String,
    default_options: SessionOptions,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: Arc<B>, codec: TokenCodec) -> Self {
        Self {
            backend,
            codec,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            default_options: SessionOptions::default(),
        }
    }

    /// Set the key namespace for subsequently issued handles.
    pub fn key_prefix(&mut self, prefix: impl Into<String>) {
        self.key_prefix = prefix.into();
    }

    /// Set the default options applied to subsequently issued handles.
    pub fn options(&mut self, options: SessionOptions) {
        self.default_options = options;
    }

    /// Resolve an inbound cookie token into a session handle.
    ///
    /// Never fails the request: a missing or unverifiable token, an absent
    /// backend record, a corrupt payload, or an unreachable backend all
    /// degrade to a fresh, empty handle with `is_new = true`.
    pub async fn new_session(&self, token: Option<&str>, name: &str) -> SessionHandle {
        if let Some(token) = token {
            match self.codec.decode(token) {
                Ok(id) => match self.load(&id).await {
                    Ok(Some(values)) => {
                        return SessionHandle {
                            id,
                            name: name.to_string(),
                            values,
                            options: self.default_options.clone(),
                            is_new: false,
                        };
                    }
                    Ok(None) => debug!("No session record for presented token"),
                    Err(e) => warn!("Failed to load session record, issuing fresh session: {}", e),
                },
                Err(e) => debug!("Rejected session token: {}", e),
            }
        }

        SessionHandle {
            id: generate_session_id(),
            name: name.to_string(),
            values: SessionValues::new(),
            options: self.default_options.clone(),
            is_new: true,
        }
    }

    /// Persist or delete the session, returning the outgoing cookie.
    ///
    /// `options.max_age <= 0` deletes the backend record (idempotently: the
    /// record may never have existed) and expires the cookie. A positive
    /// `max_age` writes the serialized values with that TTL and re-issues
    /// the signed token. `save` may be called again on the same handle;
    /// each call re-evaluates `max_age`.
    pub async fn save(&self, handle: &SessionHandle) -> Result<CookieDirective, StoreError> {
        let key = session_key(&self.key_prefix, &handle.id);

        if handle.options.max_age <= 0 {
            self.backend.delete(&key).await?;
            debug!("Deleted session {}", handle.id);
            return Ok(CookieDirective::expire(&handle.name, &handle.options));
        }

        let payload = serde_json::to_vec(&handle.values)?;
        self.backend
            .set_with_ttl(&key, &payload, handle.options.max_age)
            .await?;
        let token = self.codec.encode(&handle.id)?;
        debug!(
            "Saved session {} with ttl {}s",
            handle.id, handle.options.max_age
        );
        Ok(CookieDirective::set(&handle.name, token, &handle.options))
    }

    async fn load(&self, id: &str) -> Result<Option<SessionValues>, StoreError> {
        let key = session_key(&self.key_prefix, id);
        let Some(bytes) = self.backend.get(&key).await? else {
            return Ok(None);
        };
        let values = serde_json::from_slice(&bytes)?;
        Ok(Some(values))
    }
}
