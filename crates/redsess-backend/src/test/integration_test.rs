//! End-to-end session lifecycle against the in-memory backend.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use redsess_core::{SessionBackend, SessionStore};
    use redsess_security::TokenCodec;
    use serde_json::json;

    use crate::MemoryBackend;

    fn test_store(backend: Arc<MemoryBackend>) -> SessionStore<MemoryBackend> {
        SessionStore::new(backend, TokenCodec::new("integration-secret".to_string()))
    }

    #[tokio::test]
    async fn test_full_session_lifecycle() {
        let backend = Arc::new(MemoryBackend::new());
        let store = test_store(backend.clone());

        // First request: no cookie.
        let mut session = store.new_session(None, "hello").await;
        assert!(session.is_new);
        assert!(session.values.is_empty());

        session.values.insert("key".into(), json!("value"));
        session.options.max_age = 300;
        let cookie = store.save(&session).await.expect("save");
        assert_eq!(cookie.max_age, 300);
        assert!(backend
            .exists(&format!("s:{}", session.id))
            .await
            .unwrap());

        // Second request: the cookie round-trips the state.
        let mut session = store.new_session(Some(&cookie.value), "hello").await;
        assert!(!session.is_new);
        assert_eq!(session.values.get("key"), Some(&json!("value")));

        // Third request: the caller asks for deletion.
        session.options.max_age = -1;
        let cookie = store.save(&session).await.expect("delete");
        assert!(cookie.value.is_empty());
        assert_eq!(cookie.max_age, -1);
        assert!(!backend
            .exists(&format!("s:{}", session.id))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_record_expires_with_ttl() {
        let backend = Arc::new(MemoryBackend::new());
        let store = test_store(backend.clone());

        let mut session = store.new_session(None, "hello").await;
        session.values.insert("counter".into(), json!(1));
        session.options.max_age = 1;
        let cookie = store.save(&session).await.expect("save");

        // Still alive before the TTL elapses.
        let alive = store.new_session(Some(&cookie.value), "hello").await;
        assert!(!alive.is_new);

        tokio::time::sleep(Duration::from_millis(1200)).await;
        let expired = store.new_session(Some(&cookie.value), "hello").await;
        assert!(expired.is_new);
        assert!(!backend
            .exists(&format!("s:{}", session.id))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_tampered_cookie_degrades_to_fresh_session() {
        let backend = Arc::new(MemoryBackend::new());
        let store = test_store(backend);

        let mut session = store.new_session(None, "hello").await;
        session.values.insert("user".into(), json!("henry"));
        let cookie = store.save(&session).await.expect("save");

        let mut tampered = cookie.value.clone();
        tampered.pop();
        let fresh = store.new_session(Some(&tampered), "hello").await;
        assert!(fresh.is_new);
        assert!(fresh.values.is_empty());
        assert_ne!(fresh.id, session.id);
    }

    #[tokio::test]
    async fn test_concurrent_saves_last_writer_wins() {
        let backend = Arc::new(MemoryBackend::new());
        let store = Arc::new(test_store(backend));

        let mut session = store.new_session(None, "hello").await;
        session.options.max_age = 60;

        let mut first = session.clone();
        first.values.insert("writer".into(), json!("first"));
        let mut second = session.clone();
        second.values.insert("writer".into(), json!("second"));

        store.save(&first).await.expect("first save");
        let cookie = store.save(&second).await.expect("second save");

        let loaded = store.new_session(Some(&cookie.value), "hello").await;
        assert_eq!(loaded.values.get("writer"), Some(&json!("second")));
    }
}
