//! # Redsess Shared
//!
//! Shared configuration, constants, and telemetry for the redsess workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
