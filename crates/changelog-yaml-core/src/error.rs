//! Error types for changelog-yaml

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias using ChangelogYamlError
pub type Result<T> = std::result::Result<T, ChangelogYamlError>;

/// Main error type for changelog-yaml operations
#[derive(Debug, Error)]
pub enum ChangelogYamlError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Problems with the changelog document itself
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Errors raised while producing output
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that make a changelog document unrenderable.
///
/// Any of these abandons the whole render.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read the document source
    #[error("Failed to read changelog document from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the schema
    #[error("Failed to parse changelog document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A release references a repository that has no definition
    #[error("Release '{release}' references repository '{repository}' which has no definition")]
    MissingRepository { release: String, repository: String },

    /// A repository definition that cannot be linked to
    #[error("Repository '{repository}' is invalid: {message}")]
    InvalidRepository { repository: String, message: String },

    /// Admonition keyword is recognized but cannot be rendered
    #[error("Unsupported admonition '{0}'")]
    UnsupportedAdmonition(String),

    /// Icon name is not in the emoji table
    #[error("Unknown icon '{0}'")]
    UnknownIcon(String),

    /// Validation found problems, each already reported to the user
    #[error("Changelog document has {0} problem(s)")]
    Invalid(usize),
}

/// Errors raised while expanding references or writing output
#[derive(Debug, Error)]
pub enum RenderError {
    /// A `#` reference that is not followed by a valid pull request number
    #[error("Malformed pull request reference '{reference}': {source}")]
    MalformedPullRequest {
        reference: String,
        #[source]
        source: ParseIntError,
    },

    /// Writing to the output sink failed
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl ChangelogYamlError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_repository_message() {
        let err: ChangelogYamlError = DocumentError::MissingRepository {
            release: "v1.0.0".to_string(),
            repository: "ghost".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Release 'v1.0.0' references repository 'ghost' which has no definition"
        );
    }

    #[test]
    fn test_malformed_pull_request_keeps_source() {
        let source = "".parse::<u64>().unwrap_err();
        let err = RenderError::MalformedPullRequest {
            reference: "#".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Malformed pull request reference '#'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_write_error_is_render_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ChangelogYamlError = RenderError::from(io).into();
        assert!(matches!(err, ChangelogYamlError::Render(RenderError::Write(_))));
    }
}
