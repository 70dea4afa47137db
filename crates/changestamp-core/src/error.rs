//! Error types for changestamp

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StampError
pub type Result<T> = std::result::Result<T, StampError>;

/// Main error type for changestamp operations
#[derive(Debug, Error)]
pub enum StampError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at {0}")]
    FileNotFound(PathBuf),

    /// No section header carries the Unreleased tag or the requested version
    #[error("Failed to find changes with either Unreleased or {version} tag")]
    SectionNotFound { version: String },

    /// Release version that cannot be written into a header tag
    #[error("Invalid release version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// A `## ` line without a usable `[tag]`
    #[error("Malformed section header at line {line}: {content}")]
    MalformedHeader { line: usize, content: String },

    /// Failed to write changelog or extract output
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
