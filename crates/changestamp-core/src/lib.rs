//! Changestamp Core - shared foundations for changelog release stamping
//!
//! This crate provides the error types and configuration system used by the
//! changelog engine and the `changestamp` CLI.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config};
pub use error::{ChangelogError, ConfigError, Result, StampError};
