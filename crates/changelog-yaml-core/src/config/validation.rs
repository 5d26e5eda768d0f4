//! Configuration validation

use tracing::{debug, warn};

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Format selectors with a dedicated formatter. Anything else renders as Markdown.
pub const VALID_FORMATS: [&str; 4] = ["md", "markdown", "adoc", "asciidoc"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_render(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_render(config: &Config) -> Result<()> {
    let render = &config.render;

    if !VALID_FORMATS.contains(&render.format.as_str()) {
        warn!(
            format = %render.format,
            known = %VALID_FORMATS.join(", "),
            "unknown render.format, markdown will be used"
        );
    }

    if !(render.host.starts_with("https://") || render.host.starts_with("http://")) {
        return Err(ConfigError::InvalidValue {
            field: "render.host".to_string(),
            message: "must be an http:// or https:// URL".to_string(),
        }
        .into());
    }

    if render.host_base().ends_with(':') || render.host_base().ends_with("//") {
        return Err(ConfigError::InvalidValue {
            field: "render.host".to_string(),
            message: "host name cannot be empty".to_string(),
        }
        .into());
    }

    if render.title.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "render.title".to_string(),
            message: "title cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
