//! Changelog document types

use std::fmt;
use std::path::Path;

use changestamp_core::error::ChangelogError;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::header::HEADER_PREFIX;

/// Literal tag of the pending release section, matched case-insensitively
pub const UNRELEASED_TAG: &str = "Unreleased";

/// A changelog held as its raw lines.
///
/// Every line keeps its terminator, so rendering the document gives back
/// the exact bytes it was parsed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    lines: Vec<String>,
}

impl ChangelogDocument {
    /// Split content into lines, keeping `\n` / `\r\n` terminators
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Read a changelog file from disk
    pub fn read(path: &Path) -> Result<Self, ChangelogError> {
        if !path.exists() {
            return Err(ChangelogError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let document = Self::parse(&content);
        debug!(path = %path.display(), lines = document.len(), "changelog read");
        Ok(document)
    }

    /// All lines, terminators included
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Overwrite the line at `index`
    pub fn replace_line(&mut self, index: usize, line: impl Into<String>) {
        self.lines[index] = line.into();
    }

    /// Lines after `header_index` up to, not including, the next header
    pub fn section_body(&self, header_index: usize) -> &[String] {
        let start = (header_index + 1).min(self.lines.len());
        let end = self.lines[start..]
            .iter()
            .position(|line| line.starts_with(HEADER_PREFIX))
            .map_or(self.lines.len(), |offset| start + offset);
        &self.lines[start..end]
    }

    /// Join the lines back into file content
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

/// Identifier inside the brackets of a section header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionTag {
    /// Pending changes not yet released
    Unreleased,
    /// A concrete version string
    Version(String),
}

impl SectionTag {
    /// Whether a section carrying this tag should be stamped with `version`
    pub fn matches(&self, version: &str) -> bool {
        match self {
            Self::Unreleased => true,
            Self::Version(v) => v == version,
        }
    }
}

impl From<&str> for SectionTag {
    fn from(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case(UNRELEASED_TAG) {
            Self::Unreleased
        } else {
            Self::Version(tag.to_string())
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreleased => write!(f, "{}", UNRELEASED_TAG),
            Self::Version(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for SectionTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A `## [tag] ...` line located in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    /// Zero-based index into the document lines
    pub index: usize,
    /// Tag between the first `[` and the first `]`
    pub tag: SectionTag,
}
