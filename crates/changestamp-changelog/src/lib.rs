//! Changestamp Changelog - release stamping for Markdown changelogs
//!
//! This crate finds the `Unreleased` (or already-versioned) section of a
//! changelog, stamps it with a release version and date, and extracts the
//! section body for release notes.

pub mod header;
pub mod stamper;
pub mod types;
pub mod writer;

pub use header::{format_header, validate_version, HEADER_PREFIX};
pub use stamper::{ChangelogStamper, ExtractReport, StampOutcome, StampReport, StampRequest};
pub use types::{ChangelogDocument, SectionHeader, SectionTag};
pub use writer::same_file;
