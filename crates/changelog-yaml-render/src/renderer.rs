//! Document rendering

use std::io::Write;
use std::sync::Arc;

use changelog_yaml_core::config::{RenderConfig, DEFAULT_HOST, DEFAULT_TITLE};
use changelog_yaml_core::{ChangelogYamlError, RenderError, Result};
use tracing::{debug, info, instrument};

use crate::category::Category;
use crate::emoji::Icon;
use crate::expand::{ExpandContext, ExpanderChain};
use crate::formatter::{Formatter, MarkdownFormatter};
use crate::types::{ChangelogDocument, Changes, Release, RepositoryDefinition};

/// Settings that shape the rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Link host without trailing slash
    pub host: String,
    /// Text of the level 1 heading
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.trim_end_matches('/').to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            host: config.host_base().to_string(),
            title: config.title.clone(),
        }
    }
}

/// Renders a [`ChangelogDocument`] through a [`Formatter`]
pub struct DocumentRenderer {
    formatter: Arc<dyn Formatter>,
    options: RenderOptions,
    line_chain: ExpanderChain,
    notice_chain: ExpanderChain,
}

impl DocumentRenderer {
    /// Create a renderer with default options
    pub fn new(formatter: Arc<dyn Formatter>) -> Self {
        Self {
            formatter,
            options: RenderOptions::default(),
            line_chain: ExpanderChain::line(),
            notice_chain: ExpanderChain::notice(),
        }
    }

    /// Use custom options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = RenderOptions {
            host: options.host.trim_end_matches('/').to_string(),
            ..options
        };
        self
    }

    /// Active formatter
    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// Render the whole document into `writer`.
    ///
    /// Output is written as it is produced. On error the writer holds
    /// everything rendered up to the failing release or repository.
    #[instrument(
        skip(self, document, writer),
        fields(formatter = self.formatter.name(), releases = document.releases.len())
    )]
    pub fn render<W: Write + ?Sized>(
        &self,
        document: &ChangelogDocument,
        writer: &mut W,
    ) -> Result<()> {
        info!(
            releases = document.releases.len(),
            lines = document.line_count(),
            "rendering changelog"
        );

        emit(writer, &self.formatter.heading(1, &self.options.title))?;

        for release in &document.releases {
            self.render_release(document, release, writer)?;
        }

        writer.flush().map_err(RenderError::Write)?;
        debug!("changelog rendered");
        Ok(())
    }

    /// Render the whole document into a string
    pub fn render_to_string(&self, document: &ChangelogDocument) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(document, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| ChangelogYamlError::other(e.to_string()))
    }

    /// Run every expander over the document without producing output and
    /// collect the failures.
    ///
    /// Lines of repositories without a definition are checked against the
    /// document's default repository; the missing definition itself is
    /// reported by [`ChangelogDocument::validate`].
    pub fn check_references(&self, document: &ChangelogDocument) -> Vec<ChangelogYamlError> {
        let mut problems = Vec::new();

        for release in &document.releases {
            if let Some(notice) = release.notice() {
                let ctx = self.context(&document.repo);
                if let Err(e) = self.notice_chain.expand(notice, &ctx) {
                    problems.push(e);
                }
            }

            for (short_name, changes) in &release.repos {
                let repo = document
                    .repos
                    .get(short_name)
                    .map_or(document.repo.as_str(), |d| d.repo.as_str());
                let ctx = self.context(repo);

                for (_, lines) in changes.iter() {
                    for line in lines {
                        if let Err(e) = self.line_chain.expand(line, &ctx) {
                            problems.push(e);
                        }
                    }
                }
            }
        }

        debug!(problems = problems.len(), "reference check finished");
        problems
    }

    fn context<'a>(&'a self, repo: &'a str) -> ExpandContext<'a> {
        ExpandContext::new(&self.options.host, repo, self.formatter.as_ref())
    }

    fn render_release<W: Write + ?Sized>(
        &self,
        document: &ChangelogDocument,
        release: &Release,
        writer: &mut W,
    ) -> Result<()> {
        debug!(release = %release.name, repositories = release.repos.len(), "rendering release");
        let ctx = self.context(&document.repo);

        let tag_url = ctx.repo_url(&format!("releases/tag/{}", release.name));
        let heading = format!(
            "{} {} ({})",
            self.formatter.icon(Icon::Bookmark),
            self.formatter.link(&release.name, &tag_url),
            release.date
        );
        emit(writer, &self.formatter.heading(2, &heading))?;

        if let Some(notice) = release.notice() {
            let notice = self.notice_chain.expand(notice, &ctx)?;
            emit(writer, &format!("{}\n\n", notice))?;
        }

        for (short_name, changes) in &release.repos {
            let definition = document.resolve_repository(release, short_name)?;
            self.render_repository(short_name, definition, changes, writer)?;
        }

        Ok(())
    }

    fn render_repository<W: Write + ?Sized>(
        &self,
        short_name: &str,
        definition: &RepositoryDefinition,
        changes: &Changes,
        writer: &mut W,
    ) -> Result<()> {
        let repo_url = format!("{}/{}", self.options.host, definition.repo);
        let mut heading = self.formatter.link(short_name, &repo_url);
        if let Some(description) = definition.description() {
            heading.push_str(&format!(" - {}", description));
        }
        emit(writer, &self.formatter.heading(3, &heading))?;

        let ctx = self.context(&definition.repo);
        for (category, lines) in changes.iter() {
            for line in lines {
                let text = self.change_line(category, line, &ctx)?;
                emit(writer, &self.formatter.bullet_point(&text))?;
            }
        }

        emit(writer, "\n")
    }

    fn change_line(
        &self,
        category: Category,
        line: &str,
        ctx: &ExpandContext<'_>,
    ) -> Result<String> {
        let info = category.info();
        let mut prefix = self.formatter.icon(info.icon);
        if category.is_labeled() {
            prefix.push_str(&format!("[{}]", info.label));
        }

        let expanded = self.line_chain.expand(line, ctx)?;
        Ok(format!("{} {}", prefix, expanded))
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(Arc::new(MarkdownFormatter::new()))
    }
}

fn emit<W: Write + ?Sized>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .map_err(RenderError::Write)?;
    Ok(())
}
