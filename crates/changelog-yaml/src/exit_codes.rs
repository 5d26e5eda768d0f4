//! Exit codes for the CLI

use changelog_yaml_core::{ChangelogYamlError, RenderError};

/// Success
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// The changelog document cannot be read, parsed or rendered as written
pub const INPUT_ERROR: i32 = 3;

/// Malformed reference inside a change line
pub const RENDER_ERROR: i32 = 4;

/// Writing the output failed
pub const OUTPUT_ERROR: i32 = 5;

/// Pick the exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ChangelogYamlError>() {
        Some(ChangelogYamlError::Config(_)) => CONFIG_ERROR,
        Some(ChangelogYamlError::Document(_)) => INPUT_ERROR,
        Some(ChangelogYamlError::Render(RenderError::MalformedPullRequest { .. })) => {
            RENDER_ERROR
        }
        Some(ChangelogYamlError::Render(RenderError::Write(_))) => OUTPUT_ERROR,
        Some(ChangelogYamlError::Other(_)) | None => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog_yaml_core::{ConfigError, DocumentError};

    #[test]
    fn test_exit_code_per_error_class() {
        let config: anyhow::Error = ChangelogYamlError::from(ConfigError::InvalidValue {
            field: "render.host".to_string(),
            message: "must be an http:// or https:// URL".to_string(),
        })
        .into();
        assert_eq!(for_error(&config), CONFIG_ERROR);

        let document: anyhow::Error = ChangelogYamlError::from(DocumentError::MissingRepository {
            release: "v1".to_string(),
            repository: "ghost".to_string(),
        })
        .into();
        assert_eq!(for_error(&document), INPUT_ERROR);

        let invalid: anyhow::Error = ChangelogYamlError::from(DocumentError::Invalid(2)).into();
        assert_eq!(for_error(&invalid), INPUT_ERROR);

        let malformed: anyhow::Error = ChangelogYamlError::from(RenderError::MalformedPullRequest {
            reference: "#".to_string(),
            source: "".parse::<u64>().unwrap_err(),
        })
        .into();
        assert_eq!(for_error(&malformed), RENDER_ERROR);

        let write: anyhow::Error = ChangelogYamlError::from(RenderError::Write(
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        ))
        .into();
        assert_eq!(for_error(&write), OUTPUT_ERROR);
    }

    #[test]
    fn test_foreign_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(for_error(&err), ERROR);
    }
}
