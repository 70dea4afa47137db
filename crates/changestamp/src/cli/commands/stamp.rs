//! Stamp command

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use changestamp_changelog::{
    same_file, validate_version, ChangelogStamper, StampReport, StampRequest,
};
use changestamp_core::config::{load_config, load_config_or_default, Config};
use changestamp_core::error::{ConfigError, StampError};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Stamp the pending changelog section
#[derive(Debug, Args)]
pub struct StampCommand {
    /// Changelog file (default: changelog.file from config, else CHANGELOG.md)
    #[arg(short, long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Release version to stamp
    #[arg(short = 'v', long = "version", value_name = "VERSION", value_parser = parse_version)]
    pub version: String,

    /// Write the stamped section's entries to this file
    #[arg(long, value_name = "PATH")]
    pub extract: Option<PathBuf>,

    /// Release date as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Show what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_version(value: &str) -> Result<String, String> {
    validate_version(value).map_err(|e| e.to_string())?;
    Ok(value.to_string())
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", value, e))
}

fn report_json(report: &StampReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

impl StampCommand {
    /// Execute the stamp command relative to `cwd`
    pub fn execute(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<()> {
        info!(
            version = %self.version,
            changelog = ?self.changelog,
            extract = ?self.extract,
            dry_run = self.dry_run,
            "executing stamp command"
        );

        let report = self.stamp(cli, cwd)?;
        self.output_report(&report, cli)
    }

    /// Resolve config and paths under `cwd`, then run the stamper
    pub fn stamp(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<StampReport> {
        let config = self.load_config(cli, cwd)?;
        let request = self.build_request(&config, cwd)?;

        let stamper = ChangelogStamper::new(config.changelog.clone());
        Ok(stamper.run(&request)?)
    }

    fn load_config(&self, cli: &Cli, cwd: &Path) -> anyhow::Result<Config> {
        let config = match &cli.config {
            Some(path) => load_config(&cwd.join(path))?,
            None => load_config_or_default(cwd)?.0,
        };
        Ok(config)
    }

    fn build_request(&self, config: &Config, cwd: &Path) -> anyhow::Result<StampRequest> {
        let changelog = cwd.join(self.changelog.as_ref().unwrap_or(&config.changelog.file));
        let extract = self
            .extract
            .as_ref()
            .or(config.changelog.extract.as_ref())
            .map(|path| cwd.join(path));

        if extract
            .as_ref()
            .is_some_and(|extract| same_file(extract, &changelog))
        {
            return Err(StampError::from(ConfigError::InvalidValue {
                field: "extract".to_string(),
                message: "must differ from the changelog path".to_string(),
            })
            .into());
        }

        Ok(StampRequest {
            changelog,
            version: self.version.clone(),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            extract,
            dry_run: self.dry_run,
        })
    }

    fn output_report(&self, report: &StampReport, cli: &Cli) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", report_json(report)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }

                let header = output::version_style().apply_to(&report.header);
                let changelog = output::path_style().apply_to(report.changelog.display());

                if report.dry_run {
                    output::warning("Dry run - no files written");
                    println!(
                        "Would stamp {} in {} (line {})",
                        header, changelog, report.line
                    );
                    println!(
                        "{}",
                        output::key_value("replaces", &report.previous_tag.to_string())
                    );
                    if let Some(extract) = &report.extract {
                        println!(
                            "Would extract {} line(s) to {}",
                            extract.lines,
                            output::path_style().apply_to(extract.path.display())
                        );
                        print!("{}", extract.content);
                    }
                } else {
                    output::success(&format!(
                        "Stamped {} in {} (line {})",
                        header, changelog, report.line
                    ));
                    if let Some(extract) = &report.extract {
                        output::success(&format!(
                            "Extracted {} line(s) to {}",
                            extract.lines,
                            output::path_style().apply_to(extract.path.display())
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}
