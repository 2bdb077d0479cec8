//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that abort an aggregation run
///
/// Every variant names the counter, group or event that was degenerate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("Invalid event '{event}' on thread '{thread}': {reason}")]
    InvalidEvent {
        event: String,
        thread: String,
        reason: String,
    },

    #[error("Counter '{0}' has no samples")]
    EmptyCounter(String),

    #[error("Event group '{event}' on thread '{thread}' is empty")]
    EmptyGroup { thread: String, event: String },

    #[error("Duplicate record name: {0}")]
    DuplicateRecord(String),

    #[error(
        "Event '{event}' on thread '{thread}' occurs as both an async and a sync group; \
         narrow the event pattern to keep one kind"
    )]
    MixedKindGroup { thread: String, event: String },
}

/// Errors that can occur while building a filter configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {field} pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Filter TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during snapshot parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid snapshot format: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    InvalidEvent(#[from] AggregateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
