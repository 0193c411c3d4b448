//! Ghostream Core Library
//!
//! Shared configuration and error types for the Ghostream web front-end.

pub mod config;
pub mod error;

pub use config::GhostreamConfig;
pub use error::{Error, Result};

/// Ghostream version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
