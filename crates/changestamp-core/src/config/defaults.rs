//! Default configuration values

/// Default changelog file name
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "changestamp.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "changestamp.yaml";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".changestamp.toml",
        ".changestamp.yaml",
    ]
}
