//! Section header parsing and formatting

use chrono::NaiveDate;
use changestamp_core::error::ChangelogError;

use crate::types::{SectionHeader, SectionTag};

/// Prefix that marks a changelog section header
pub const HEADER_PREFIX: &str = "## ";

/// Date layout used in stamped headers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl SectionHeader {
    /// Parse a single line.
    ///
    /// Returns `Ok(None)` for lines that do not start with [`HEADER_PREFIX`].
    /// A prefixed line must contain both `[` and `]`, otherwise it is reported
    /// as [`ChangelogError::MalformedHeader`]. When the first `]` comes before
    /// the first `[` the tag is empty and matches no version. `index` is
    /// zero-based, the error carries the one-based line number.
    pub fn parse(line: &str, index: usize) -> Result<Option<Self>, ChangelogError> {
        if !line.starts_with(HEADER_PREFIX) {
            return Ok(None);
        }

        match (line.find('['), line.find(']')) {
            (Some(open), Some(close)) => {
                let tag = if open < close {
                    &line[open + 1..close]
                } else {
                    ""
                };
                Ok(Some(Self {
                    index,
                    tag: SectionTag::from(tag),
                }))
            }
            _ => Err(ChangelogError::MalformedHeader {
                line: index + 1,
                content: line.trim_end().to_string(),
            }),
        }
    }
}

/// Render a stamped header line, without terminator
pub fn format_header(version: &str, date: NaiveDate) -> String {
    format!("{}[{}] - {}", HEADER_PREFIX, version, date.format(DATE_FORMAT))
}

/// Check that a version can stand as a header tag
pub fn validate_version(version: &str) -> Result<(), ChangelogError> {
    let reason = if version.trim().is_empty() {
        Some("version cannot be empty")
    } else if version.contains(['\n', '\r']) {
        Some("version cannot contain line breaks")
    } else if version.contains(']') {
        Some("version cannot contain ']'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ChangelogError::InvalidVersion {
            version: version.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_unreleased() {
        let header = SectionHeader::parse("## [Unreleased]\n", 2).unwrap().unwrap();
        assert_eq!(header.index, 2);
        assert_eq!(header.tag, SectionTag::Unreleased);
    }

    #[test]
    fn test_parse_versioned_with_trailing_text() {
        let header = SectionHeader::parse("## [1.4.0] - 2023-11-02\n", 0)
            .unwrap()
            .unwrap();
        assert_eq!(header.tag, SectionTag::Version("1.4.0".to_string()));
    }

    #[test]
    fn test_parse_uses_first_brackets() {
        let header = SectionHeader::parse("## [0.2.0] see [notes]\n", 0)
            .unwrap()
            .unwrap();
        assert_eq!(header.tag, SectionTag::Version("0.2.0".to_string()));
    }

    #[test]
    fn test_non_header_lines_are_skipped() {
        for line in [
            "- fixed [issue] handling\n",
            "# [Changelog]\n",
            "### [Added]\n",
            "##[1.0.0]\n",
            " ## [1.0.0]\n",
            "\n",
        ] {
            assert!(SectionHeader::parse(line, 0).unwrap().is_none(), "{line:?}");
        }
    }

    #[test]
    fn test_missing_brackets_is_malformed() {
        let err = SectionHeader::parse("## Unreleased\n", 6).unwrap_err();
        match err {
            ChangelogError::MalformedHeader { line, content } => {
                assert_eq!(line, 7);
                assert_eq!(content, "## Unreleased");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_close_bracket_is_malformed() {
        assert!(SectionHeader::parse("## [Unreleased\n", 0).is_err());
    }

    #[test]
    fn test_reversed_brackets_give_empty_tag() {
        let header = SectionHeader::parse("## ]Unreleased[\n", 0)
            .unwrap()
            .unwrap();
        assert_eq!(header.tag, SectionTag::Version(String::new()));
        assert!(!header.tag.matches("1.0.0"));
    }

    #[test]
    fn test_format_header_zero_pads() {
        assert_eq!(
            format_header("1.2.3", date(2024, 3, 5)),
            "## [1.2.3] - 2024-03-05"
        );
        assert_eq!(
            format_header("v10.0.0-rc.1", date(2025, 12, 31)),
            "## [v10.0.0-rc.1] - 2025-12-31"
        );
    }

    #[test]
    fn test_validate_version() {
        assert!(validate_version("1.2.3").is_ok());
        assert!(validate_version("2024.10-beta").is_ok());
        assert!(validate_version("").is_err());
        assert!(validate_version("   ").is_err());
        assert!(validate_version("1.0\n").is_err());
        assert!(validate_version("1.0]").is_err());
    }
}
