//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::DEFAULT_CHANGELOG_FILE;

/// Main configuration for changestamp
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the working directory
    pub file: PathBuf,

    /// Default path the stamped section body is extracted to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<PathBuf>,

    /// Replace files through a temporary sibling and a rename
    pub atomic_write: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            extract: None,
            atomic_write: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
        assert!(config.changelog.extract.is_none());
        assert!(config.changelog.atomic_write);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[changelog]\nextract = \"NOTES.md\"\n").unwrap();
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
        assert_eq!(config.changelog.extract, Some(PathBuf::from("NOTES.md")));
        assert!(config.changelog.atomic_write);
    }

    #[test]
    fn test_yaml_overrides() {
        let config: Config =
            serde_yaml::from_str("changelog:\n  file: docs/HISTORY.md\n  atomic_write: false\n")
                .unwrap();
        assert_eq!(config.changelog.file, PathBuf::from("docs/HISTORY.md"));
        assert!(!config.changelog.atomic_write);
    }
}
