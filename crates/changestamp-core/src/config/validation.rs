//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(extract) = &config.changelog.extract {
        if extract.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "changelog.extract".to_string(),
                message: "cannot be empty".to_string(),
            }
            .into());
        }

        if *extract == config.changelog.file {
            return Err(ConfigError::InvalidValue {
                field: "changelog.extract".to_string(),
                message: "must differ from changelog.file".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
