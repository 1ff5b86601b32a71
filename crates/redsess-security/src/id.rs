//! Session identifier generation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::Rng;
use redsess_shared::constants::SESSION_ID_BYTES;

/// Generate a cryptographically random session identifier.
///
/// 32 bytes of CSPRNG output, base64url without padding. All identifiers
/// share one global namespace regardless of which store issued them.
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    rand::rng().fill(&mut bytes[..]);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_url_safe_and_fixed_length() {
        let id = generate_session_id();
        assert_eq!(id.len(), 43); // 32 bytes, base64url, no padding
        let decoded = URL_SAFE_NO_PAD.decode(&id).expect("valid base64url");
        assert_eq!(decoded.len(), SESSION_ID_BYTES);
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_ne!(a, b);
    }
}
