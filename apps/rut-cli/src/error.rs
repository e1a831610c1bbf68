//! # CLI Error Types
//!
//! Everything that can stop a `rut` invocation before it reports results.
//! A value that fails validation is NOT an error here: it is a report line
//! and an exit status of 1.
//!
//! ## Exit Status
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  0  every value valid / command succeeded                               │
//! │  1  at least one value failed validation                                │
//! │  2  CliError (bad config, unreadable file, bad check-digit body)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Config file given with `--config` does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file is not valid TOML for `RutConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// File could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `check-digit` body is not 1 to 8 digits.
    #[error("Invalid RUT body '{0}': expected 1 to 8 digits")]
    InvalidBody(String),

    // =========================================================================
    // Output Errors
    // =========================================================================
    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
