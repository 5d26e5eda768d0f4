//! Configuration types

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::{DEFAULT_FORMAT, DEFAULT_HOST, DEFAULT_TITLE};

/// Main configuration for changelog-yaml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog document to read when no input is given on the command line
    pub input: Option<PathBuf>,

    /// File to write when no output is given on the command line
    pub output: Option<PathBuf>,

    /// Rendering configuration
    pub render: RenderConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output format selector (md, markdown, adoc, asciidoc)
    pub format: String,

    /// Base URL that repository paths and profile names are appended to
    pub host: String,

    /// Text of the top-level heading
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            host: DEFAULT_HOST.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Host URL without any trailing slash
    pub fn host_base(&self) -> &str {
        self.host.trim_end_matches('/')
    }
}
