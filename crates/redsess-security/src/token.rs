//! Session token codec
//!
//! The cookie value is `base64url(claims).base64url(hmac)` where the MAC is
//! HMAC-SHA256 over the encoded claims, keyed with the process-wide secret.
//! Verification happens before the payload is parsed.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use redsess_shared::constants::MAX_TOKEN_LENGTH;

type HmacSha256 = Hmac<Sha256>;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token signature mismatch")]
    InvalidSignature,
    #[error("Malformed token")]
    Malformed,
    #[error("Token expired")]
    Expired,
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sid: String,
    iat: i64,
}

/// Signs and verifies the opaque session token carried in the cookie.
pub struct TokenCodec {
    secret: String,
    max_age: Option<i64>,
}

impl TokenCodec {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            max_age: None,
        }
    }

    /// Reject tokens whose issue timestamp is older than `seconds` on decode,
    /// so a stolen token cannot outlive its declared lifetime.
    pub fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn encode(&self, session_id: &str) -> Result<String, CodecError> {
        self.encode_at(session_id, Utc::now().timestamp())
    }

    fn encode_at(&self, session_id: &str, issued_at: i64) -> Result<String, CodecError> {
        let claims = TokenClaims {
            sid: session_id.to_string(),
            iat: issued_at,
        };
        let body =
            serde_json::to_vec(&claims).map_err(|e| CodecError::CreationError(e.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(body);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let tag = mac.finalize().into_bytes();

        Ok(format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(tag)))
    }

    pub fn decode(&self, token: &str) -> Result<String, CodecError> {
        if token.is_empty() || token.len() > MAX_TOKEN_LENGTH {
            return Err(CodecError::Malformed);
        }
        let (payload, tag) = token.split_once('.').ok_or(CodecError::Malformed)?;
        let tag = URL_SAFE_NO_PAD
            .decode(tag)
            .map_err(|_| CodecError::Malformed)?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        // verify_slice is constant-time.
        mac.verify_slice(&tag)
            .map_err(|_| CodecError::InvalidSignature)?;

        let body = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| CodecError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&body).map_err(|_| CodecError::Malformed)?;

        if let Some(max_age) = self.max_age {
            if Utc::now().timestamp() - claims.iat > max_age {
                return Err(CodecError::Expired);
            }
        }

        Ok(claims.sid)
    }

    fn mac(&self) -> Result<HmacSha256, CodecError> {
        HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| CodecError::CreationError(format!("HMAC error: {}", e)))
    }
}
