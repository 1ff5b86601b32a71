//! Cookie options and outgoing directives

use redsess_shared::constants::{DEFAULT_COOKIE_PATH, DEFAULT_MAX_AGE};
use serde::{Deserialize, Serialize};

/// Per-save cookie and lifetime settings.
///
/// `max_age <= 0` is the sentinel for "delete this session".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    pub path: String,
    pub domain: String,
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            path: DEFAULT_COOKIE_PATH.to_string(),
            domain: String::new(),
            max_age: DEFAULT_MAX_AGE,
            secure: false,
            http_only: true,
        }
    }
}

/// Outgoing cookie description handed back to the HTTP layer.
///
/// The store never parses or writes headers; translating this into a
/// `Set-Cookie` header is the transport's job.
#[derive(Debug, Clone, PartialEq)]
pub struct CookieDirective {
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: String,
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
}

impl CookieDirective {
    pub fn set(name: &str, token: String, options: &SessionOptions) -> Self {
        Self {
            name: name.to_string(),
            value: token,
            path: options.path.clone(),
            domain: options.domain.clone(),
            max_age: options.max_age,
            secure: options.secure,
            http_only: options.http_only,
        }
    }

    /// Directive that clears the cookie immediately.
    pub fn expire(name: &str, options: &SessionOptions) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
            path: options.path.clone(),
            domain: options.domain.clone(),
            max_age: -1,
            secure: options.secure,
            http_only: options.http_only,
        }
    }
}
