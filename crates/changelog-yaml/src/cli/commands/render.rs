//! Render command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use changelog_yaml_core::config::load_config_or_default;
use changelog_yaml_core::{ChangelogYamlError, RenderError};
use changelog_yaml_render::{DocumentRenderer, FormatterRegistry, RenderOptions};

use super::read_input;
use crate::cli::{output, Cli};

/// Render a changelog document
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Output format: md, markdown, adoc or asciidoc (others fall back to markdown)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Changelog document to read (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL for repository, pull request and profile links
    #[arg(long)]
    pub host: Option<String>,

    /// Text of the top-level heading
    #[arg(long)]
    pub title: Option<String>,
}

impl RenderCommand {
    /// Execute the render command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            format = ?self.format,
            input = ?self.input,
            output = ?self.output,
            "executing render command"
        );
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let selector = self.format.as_deref().unwrap_or(&config.render.format);
        let formatter = FormatterRegistry::new().resolve(selector);

        let mut options = RenderOptions::from(&config.render);
        if let Some(host) = &self.host {
            options.host = host.clone();
        }
        if let Some(title) = &self.title {
            options.title = title.clone();
        }

        let input = self.input.as_deref().or(config.input.as_deref());
        let document = read_input(input)?;

        let renderer = DocumentRenderer::new(formatter).with_options(options);

        match self.output.as_ref().or(config.output.as_ref()) {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|e| ChangelogYamlError::from(RenderError::Write(e)))?;
                let mut writer = BufWriter::new(file);
                renderer.render(&document, &mut writer)?;

                if !cli.quiet {
                    output::success(&format!(
                        "Changelog written to {}",
                        style(path.display()).cyan()
                    ));
                }
            }
            None => {
                let stdout = std::io::stdout();
                let mut writer = BufWriter::new(stdout.lock());
                renderer.render(&document, &mut writer)?;
            }
        }

        Ok(())
    }
}
