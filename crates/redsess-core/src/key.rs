//! Backend key namespace

/// Map a session identifier into the backend key namespace.
///
/// Pure concatenation: unique identifiers under a fixed prefix map to unique
/// keys. Rotating the prefix at runtime orphans records written under the
/// old prefix; they self-expire via TTL.
pub fn session_key(prefix: &str, id: &str) -> String {
    format!("{}{}", prefix, id)
}
