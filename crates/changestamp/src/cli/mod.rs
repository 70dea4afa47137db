//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;

use commands::StampCommand;

/// Stamp the Unreleased section of a changelog with a release version and date
#[derive(Debug, Parser)]
#[command(name = "changestamp")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<std::path::PathBuf>,

    /// Configuration file (default: search for changestamp.toml/.yaml upwards)
    #[arg(long, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub stamp: StampCommand,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        self.execute_in(&std::env::current_dir()?)
    }

    /// Execute with relative paths resolved against `base` (and `-C`)
    pub fn execute_in(&self, base: &Path) -> anyhow::Result<()> {
        let cwd = self.working_dir(base)?;
        self.stamp.execute(self, &cwd)
    }

    /// Directory that paths and config discovery are resolved from
    pub fn working_dir(&self, base: &Path) -> anyhow::Result<PathBuf> {
        let Some(dir) = &self.directory else {
            return Ok(base.to_path_buf());
        };

        let dir = base.join(dir);
        if !dir.is_dir() {
            anyhow::bail!("Working directory not found: {}", dir.display());
        }
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_short_flags() {
        let cli =
            Cli::try_parse_from(["changestamp", "-c", "docs/CHANGES.md", "-v", "1.2.3"]).unwrap();
        assert_eq!(cli.stamp.changelog, Some(PathBuf::from("docs/CHANGES.md")));
        assert_eq!(cli.stamp.version, "1.2.3");
        assert!(cli.stamp.extract.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "changestamp",
            "--changelog",
            "CHANGELOG.md",
            "--version",
            "2.0.0",
            "--extract",
            "notes.md",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.stamp.version, "2.0.0");
        assert_eq!(cli.stamp.extract, Some(PathBuf::from("notes.md")));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_version_is_required() {
        assert!(Cli::try_parse_from(["changestamp", "-c", "CHANGELOG.md"]).is_err());
    }

    #[test]
    fn test_working_dir_follows_directory_flag() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("pkg")).unwrap();

        let cli = Cli::try_parse_from(["changestamp", "-C", "pkg", "-v", "1.0.0"]).unwrap();
        assert_eq!(cli.working_dir(temp.path()).unwrap(), temp.path().join("pkg"));

        let cli = Cli::try_parse_from(["changestamp", "-v", "1.0.0"]).unwrap();
        assert_eq!(cli.working_dir(temp.path()).unwrap(), temp.path());
    }

    #[test]
    fn test_working_dir_must_exist() {
        let temp = tempfile::TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["changestamp", "-C", "missing", "-v", "1.0.0"]).unwrap();
        assert!(cli.working_dir(temp.path()).is_err());
    }

    #[test]
    fn test_changelog_defaults_to_unset() {
        let cli = Cli::try_parse_from(["changestamp", "-v", "1.0.0"]).unwrap();
        assert!(cli.stamp.changelog.is_none());
        assert!(!cli.stamp.dry_run);
    }
}
