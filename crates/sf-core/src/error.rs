//! Error types for sf-core

use thiserror::Error;

/// Core error type for Songflow
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: IO error
    #[error("[E003] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E005: Config YAML parse error
    #[error("[E005] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// P001: Record does not conform to the expected structure
    #[error("[P001] Malformed record in '{path}': {message}")]
    RecordParse { path: String, message: String },

    /// P002: Song file contains no JSON record
    #[error("[P002] No song record found in '{path}'")]
    EmptySongFile { path: String },

    /// P003: Event timestamp outside the representable calendar range
    #[error("[P003] Timestamp out of range: {ts} ms")]
    TimestampOutOfRange { ts: i64 },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
