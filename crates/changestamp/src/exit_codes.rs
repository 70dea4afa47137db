//! Exit codes for the CLI

use changestamp_core::error::{ChangelogError, StampError};

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Changelog file does not exist
pub const CHANGELOG_NOT_FOUND: i32 = 3;

/// No section tagged Unreleased or with the requested version
pub const SECTION_NOT_FOUND: i32 = 4;

/// Section header without a bracketed tag
pub const MALFORMED_HEADER: i32 = 5;

/// Map a command failure to the process exit code
pub fn from_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StampError>() {
        Some(StampError::Config(_)) => CONFIG_ERROR,
        Some(StampError::Changelog(ChangelogError::FileNotFound(_))) => CHANGELOG_NOT_FOUND,
        Some(StampError::Changelog(ChangelogError::SectionNotFound { .. })) => SECTION_NOT_FOUND,
        Some(StampError::Changelog(ChangelogError::MalformedHeader { .. })) => MALFORMED_HEADER,
        _ => ERROR,
    }
}
