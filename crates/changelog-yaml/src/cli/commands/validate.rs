//! Validate command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use changelog_yaml_core::config::load_config_or_default;
use changelog_yaml_core::{ChangelogYamlError, Config, DocumentError};
use changelog_yaml_render::{ChangelogDocument, DocumentRenderer, RenderOptions};

use super::read_input;
use crate::cli::{output, Cli};

/// Check a changelog document without rendering it
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Changelog document to read (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = ?self.input, json = self.json, "executing validate command");
        let cwd = std::env::current_dir()?;

        let (config, config_path) = load_config_or_default(&cwd)?;
        let input = self.input.as_deref().or(config.input.as_deref());
        let document = read_input(input)?;

        let errors = collect_problems(&document, &config);
        let passed = errors.is_empty();

        if self.json {
            let output = serde_json::json!({
                "valid": passed,
                "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                "releases": document.releases.len(),
                "repositories": document.repos.len(),
                "lines": document.line_count(),
                "errors": &errors,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else if !cli.quiet {
            println!("{}", output::header("Validation Results"));
            println!();

            if let Some(path) = config_path {
                let path = style(path.display()).cyan().to_string();
                println!("{}", output::key_value("Config", &path));
            }
            println!("{}", output::key_value("Releases", &document.releases.len().to_string()));
            println!("{}", output::key_value("Repositories", &document.repos.len().to_string()));
            println!("{}", output::key_value("Lines", &document.line_count().to_string()));
            println!();

            if !errors.is_empty() {
                println!("{}", style("Errors:").red().bold());
                for error in &errors {
                    println!("  {} {}", style("✗").red(), error);
                }
                println!();
            }

            if passed {
                output::success("All checks passed");
            }
        }

        if !passed {
            return Err(ChangelogYamlError::from(DocumentError::Invalid(errors.len())).into());
        }

        Ok(())
    }
}

/// Structural problems first, then reference syntax problems
fn collect_problems(document: &ChangelogDocument, config: &Config) -> Vec<String> {
    let renderer = DocumentRenderer::default().with_options(RenderOptions::from(&config.render));

    document
        .validate()
        .into_iter()
        .map(|e| e.to_string())
        .chain(
            renderer
                .check_references(document)
                .into_iter()
                .map(|e| e.to_string()),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use changelog_yaml_render::parse_document;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_failed_validation_maps_to_input_error() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("changelog.yaml");
        std::fs::write(
            &input,
            "repo: org/core\nreleases:\n  - name: v1\n    repos:\n      ghost:\n        fixed: [\"Broken # ref\"]\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from(["changelog-yaml", "-q", "validate"]).unwrap();
        let cmd = ValidateCommand {
            input: Some(input),
            json: false,
        };

        let err = cmd.execute(&cli).unwrap_err();
        assert_eq!(exit_codes::for_error(&err), exit_codes::INPUT_ERROR);
        assert_eq!(err.to_string(), "Changelog document has 2 problem(s)");
    }

    #[test]
    fn test_collect_problems_clean() {
        let document = parse_document(
            "repo: org/core\nreleases:\n  - name: v1\n    repos:\n      core:\n        fixed: [\"Done in #3\"]\nrepos:\n  core:\n    repo: org/core\n",
        )
        .unwrap();
        assert!(collect_problems(&document, &Config::default()).is_empty());
    }

    #[test]
    fn test_collect_problems_reports_everything() {
        let document = parse_document(
            "repo: org/core\nreleases:\n  - name: v1\n    notice: \"TIP: soon\"\n    repos:\n      ghost:\n        fixed: [\"Broken # ref\"]\n",
        )
        .unwrap();

        let problems = collect_problems(&document, &Config::default());
        assert_eq!(problems.len(), 3);
        assert!(problems[0].contains("ghost"));
        assert!(problems.iter().any(|p| p.contains("TIP")));
        assert!(problems.iter().any(|p| p.contains("Malformed pull request")));
    }
}
