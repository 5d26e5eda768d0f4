//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "changelog-yaml.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "changelog-yaml.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".changelog-yaml.yaml";

/// Default output format selector
pub const DEFAULT_FORMAT: &str = "markdown";

/// Default link host
pub const DEFAULT_HOST: &str = "https://github.com/";

/// Default top-level heading
pub const DEFAULT_TITLE: &str = "Changelog";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ALT_CONFIG_FILE,
        ".changelog-yaml.toml",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_search_order() {
        let names = config_file_names();
        assert_eq!(names[0], DEFAULT_CONFIG_TOML);
        assert_eq!(names[1], DEFAULT_CONFIG_YAML);
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_default_host_has_scheme() {
        assert!(DEFAULT_HOST.starts_with("https://"));
    }
}
