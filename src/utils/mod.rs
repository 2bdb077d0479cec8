//! Utility modules for configuration, error handling, and name sanitization.

pub mod config;
pub mod error;
pub mod names;

// Re-export commonly used error types for convenience
pub use error::{AggregateError, ConfigError, OutputError, ParseError};
