//! Application-wide constants

pub const DEFAULT_KEY_PREFIX: &str = "s:";
pub const DEFAULT_COOKIE_NAME: &str = "sid";
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_MAX_AGE: i64 = 86400 * 30;
pub const SESSION_ID_BYTES: usize = 32;
pub const MAX_TOKEN_LENGTH: usize = 4096;
