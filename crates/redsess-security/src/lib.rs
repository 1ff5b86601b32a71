//! # Redsess Security
//!
//! Security utilities: session token codec and identifier generation.

pub mod id;
pub mod token;

pub use id::generate_session_id;
pub use token::{CodecError, TokenCodec};
