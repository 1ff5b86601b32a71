//! Store and backend errors

use thiserror::Error;

/// Failures surfaced by a [`crate::backend::SessionBackend`] adapter.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend connection pool timed out")]
    PoolTimeout,

    #[error("Backend connection error: {0}")]
    Connection(String),

    #[error("Backend command error: {0}")]
    Command(String),

    #[error("Cluster routing retries exhausted: {0}")]
    RoutingExhausted(String),
}

/// Failures surfaced by [`crate::store::SessionStore::save`].
///
/// Loads never produce these: `new_session` degrades every failure to a
/// fresh session.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session token error: {0}")]
    Codec(#[from] redsess_security::CodecError),
}
