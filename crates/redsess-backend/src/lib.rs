//! # Redsess Backend
//!
//! Key-value adapters behind the session store: Redis single node, Redis
//! cluster (with bounded routing retry), a configuration-driven universal
//! wrapper, and an in-memory map for tests and development.

pub mod bootstrap;
pub mod memory;
pub mod redis;

#[cfg(test)]
mod test;

pub use self::bootstrap::store_from_config;
pub use self::memory::MemoryBackend;
pub use self::redis::{RedisBackend, RedisClusterBackend, UniversalBackend};
