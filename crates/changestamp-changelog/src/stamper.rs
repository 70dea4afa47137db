//! Changelog stamping

use std::path::PathBuf;

use chrono::NaiveDate;
use changestamp_core::config::ChangelogConfig;
use changestamp_core::error::{ChangelogError, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::header::{format_header, validate_version};
use crate::types::{ChangelogDocument, SectionHeader, SectionTag};
use crate::writer::write_file;

/// Inputs for a full stamp run against a file
#[derive(Debug, Clone)]
pub struct StampRequest {
    /// Changelog to stamp in place
    pub changelog: PathBuf,
    /// Release version written into the header tag
    pub version: String,
    /// Release date written after the tag
    pub date: NaiveDate,
    /// Where to write the stamped section body, if anywhere
    pub extract: Option<PathBuf>,
    /// Compute everything but write nothing
    pub dry_run: bool,
}

/// Result of stamping an in-memory document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    /// Zero-based index of the stamped line
    pub index: usize,
    /// Tag the header carried before stamping
    pub previous_tag: SectionTag,
    /// New header text, without terminator
    pub header: String,
}

impl StampOutcome {
    /// One-based line number of the stamped header
    pub fn line(&self) -> usize {
        self.index + 1
    }
}

/// Extraction summary
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    /// Extract destination
    pub path: PathBuf,
    /// Number of body lines extracted
    pub lines: usize,
    /// Extracted text, kept out of the serialized report
    #[serde(skip)]
    pub content: String,
}

/// Summary of a completed stamp run
#[derive(Debug, Clone, Serialize)]
pub struct StampReport {
    /// Changelog that was stamped
    pub changelog: PathBuf,
    /// Release version written into the header
    pub version: String,
    /// Release date written into the header
    pub date: NaiveDate,
    /// New header text, without terminator
    pub header: String,
    /// One-based line number of the stamped header
    pub line: usize,
    /// Tag the header carried before stamping
    pub previous_tag: SectionTag,
    /// Extraction summary, when an extract path was given
    pub extract: Option<ExtractReport>,
    /// Whether writes were skipped
    pub dry_run: bool,
}

/// Stamps the pending section of a changelog with a release version
pub struct ChangelogStamper {
    config: ChangelogConfig,
}

impl ChangelogStamper {
    /// Create a new stamper
    pub fn new(config: ChangelogConfig) -> Self {
        Self { config }
    }

    /// Stamp the first header tagged `Unreleased` or `version`.
    ///
    /// Headers are scanned in document order and scanning stops at the first
    /// match. The document is only modified when a match is found.
    #[instrument(skip(self, document), fields(lines = document.len()))]
    pub fn stamp(
        &self,
        document: &mut ChangelogDocument,
        version: &str,
        date: NaiveDate,
    ) -> Result<StampOutcome> {
        validate_version(version)?;

        let mut found = None;
        for (index, line) in document.lines().iter().enumerate() {
            let Some(header) = SectionHeader::parse(line, index)? else {
                continue;
            };

            if header.tag.matches(version) {
                found = Some(header);
                break;
            }
            debug!(line = index + 1, tag = %header.tag, "skipping section");
        }

        let header = found.ok_or_else(|| ChangelogError::SectionNotFound {
            version: version.to_string(),
        })?;

        let stamped = format_header(version, date);
        document.replace_line(header.index, format!("{}\n", stamped));
        info!(line = header.index + 1, previous = %header.tag, header = %stamped, "section stamped");

        Ok(StampOutcome {
            index: header.index,
            previous_tag: header.tag,
            header: stamped,
        })
    }

    /// Body of the stamped section, verbatim
    pub fn extract(&self, document: &ChangelogDocument, outcome: &StampOutcome) -> String {
        document.section_body(outcome.index).concat()
    }

    /// Read, stamp, persist and optionally extract.
    ///
    /// Nothing is written unless stamping succeeds; the extract file is only
    /// written after the changelog itself has been replaced.
    #[instrument(skip(self, request), fields(changelog = %request.changelog.display(), version = %request.version))]
    pub fn run(&self, request: &StampRequest) -> Result<StampReport> {
        let mut document = ChangelogDocument::read(&request.changelog)?;
        let outcome = self.stamp(&mut document, &request.version, request.date)?;

        let extract = request.extract.as_ref().map(|path| ExtractReport {
            path: path.clone(),
            lines: document.section_body(outcome.index).len(),
            content: self.extract(&document, &outcome),
        });

        if request.dry_run {
            info!("dry run, no files written");
        } else {
            write_file(
                &request.changelog,
                &document.render(),
                self.config.atomic_write,
            )?;
            info!(path = %request.changelog.display(), "changelog updated");

            if let Some(extract) = &extract {
                write_file(&extract.path, &extract.content, self.config.atomic_write)?;
                info!(path = %extract.path.display(), lines = extract.lines, "section extracted");
            }
        }

        Ok(StampReport {
            changelog: request.changelog.clone(),
            version: request.version.clone(),
            date: request.date,
            line: outcome.line(),
            header: outcome.header,
            previous_tag: outcome.previous_tag,
            extract,
            dry_run: request.dry_run,
        })
    }
}

impl Default for ChangelogStamper {
    fn default() -> Self {
        Self::new(ChangelogConfig::default())
    }
}
