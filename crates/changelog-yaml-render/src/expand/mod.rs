//! Inline reference expansion
//!
//! Expanders rewrite shorthand references inside a change line (`#12`,
//! `$abc123`, `@name`, `NOTE: ...`) into formatter markup. A line is kept as
//! a list of segments: raw source text and text an expander already
//! produced. Expanders only ever scan raw segments, so the output of one
//! expander is never matched again by a later one.

mod admonition;
mod commit_hash;
mod profile;
mod pull_request;

pub use admonition::AdmonitionExpander;
pub use commit_hash::CommitHashExpander;
pub use profile::ProfileExpander;
pub use pull_request::PullRequestExpander;

use changelog_yaml_core::Result;
use regex::{Captures, Regex};
use tracing::trace;

use crate::formatter::Formatter;

/// Everything an expander needs to build links
#[derive(Clone, Copy)]
pub struct ExpandContext<'a> {
    /// Link host without trailing slash (e.g. `https://github.com`)
    pub host: &'a str,
    /// Repository path of the line being expanded (e.g. `org/project`)
    pub repo: &'a str,
    /// Active output formatter
    pub formatter: &'a dyn Formatter,
}

impl<'a> ExpandContext<'a> {
    /// Create a new context
    pub fn new(host: &'a str, repo: &'a str, formatter: &'a dyn Formatter) -> Self {
        Self {
            host: host.trim_end_matches('/'),
            repo,
            formatter,
        }
    }

    /// URL of a page inside the current repository
    pub fn repo_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.host, self.repo, path)
    }

    /// URL of a user profile
    pub fn profile_url(&self, name: &str) -> String {
        format!("{}/{}", self.host, name)
    }
}

/// A single reference rewriter
pub trait Expander: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Pattern matching one reference
    fn pattern(&self) -> &Regex;

    /// Replacement text for one match
    fn replace(&self, caps: &Captures<'_>, ctx: &ExpandContext<'_>) -> Result<String>;

    /// Rewrite every reference in `text`.
    ///
    /// Text without a match is returned unchanged.
    fn expand(&self, text: &str, ctx: &ExpandContext<'_>) -> Result<String> {
        let mut line = SegmentedLine::new(text);
        line.apply(self, ctx)?;
        Ok(line.finish())
    }
}

enum Segment {
    Raw(String),
    Rendered(String),
}

/// Line under expansion, split into raw and already-rendered parts
struct SegmentedLine {
    segments: Vec<Segment>,
}

impl SegmentedLine {
    fn new(text: &str) -> Self {
        Self {
            segments: vec![Segment::Raw(text.to_string())],
        }
    }

    /// Run one expander over every raw segment.
    ///
    /// All matches of a segment are collected first, then the segment is
    /// rebuilt in a single pass.
    fn apply<E: Expander + ?Sized>(
        &mut self,
        expander: &E,
        ctx: &ExpandContext<'_>,
    ) -> Result<()> {
        let segments = std::mem::take(&mut self.segments);
        let mut rebuilt = Vec::with_capacity(segments.len());
        let mut replaced = 0usize;

        for segment in segments {
            let text = match segment {
                Segment::Raw(text) => text,
                rendered @ Segment::Rendered(_) => {
                    rebuilt.push(rendered);
                    continue;
                }
            };

            let mut spans = Vec::new();
            for caps in expander.pattern().captures_iter(&text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                spans.push((whole.range(), expander.replace(&caps, ctx)?));
            }

            if spans.is_empty() {
                rebuilt.push(Segment::Raw(text));
                continue;
            }

            replaced += spans.len();
            let mut last = 0;
            for (range, replacement) in spans {
                if range.start > last {
                    rebuilt.push(Segment::Raw(text[last..range.start].to_string()));
                }
                rebuilt.push(Segment::Rendered(replacement));
                last = range.end;
            }
            if last < text.len() {
                rebuilt.push(Segment::Raw(text[last..].to_string()));
            }
        }

        if replaced > 0 {
            trace!(expander = expander.name(), replaced, "expanded references");
        }
        self.segments = rebuilt;
        Ok(())
    }

    fn finish(self) -> String {
        self.segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Raw(text) | Segment::Rendered(text) => text,
            })
            .collect()
    }
}

/// Ordered list of expanders applied to the same line
pub struct ExpanderChain {
    expanders: Vec<Box<dyn Expander>>,
}

impl ExpanderChain {
    /// Create an empty chain
    pub fn empty() -> Self {
        Self {
            expanders: Vec::new(),
        }
    }

    /// Chain used for change lines: pull requests, commit hashes, mentions
    pub fn line() -> Self {
        Self::empty()
            .with(PullRequestExpander)
            .with(CommitHashExpander)
            .with(ProfileExpander)
    }

    /// Chain used for release notices: admonitions, then mentions
    pub fn notice() -> Self {
        Self::empty().with(AdmonitionExpander).with(ProfileExpander)
    }

    /// Append an expander
    pub fn with<E: Expander + 'static>(mut self, expander: E) -> Self {
        self.expanders.push(Box::new(expander));
        self
    }

    /// Names of the expanders in application order
    pub fn names(&self) -> Vec<&'static str> {
        self.expanders.iter().map(|e| e.name()).collect()
    }

    /// Apply every expander in order
    pub fn expand(&self, text: &str, ctx: &ExpandContext<'_>) -> Result<String> {
        let mut line = SegmentedLine::new(text);
        for expander in &self.expanders {
            line.apply(expander.as_ref(), ctx)?;
        }
        Ok(line.finish())
    }
}

/// Expand pull request, commit hash and profile references in a change line
pub fn expand_line(line: &str, ctx: &ExpandContext<'_>) -> Result<String> {
    ExpanderChain::line().expand(line, ctx)
}

/// Expand admonitions and profile references in a release notice
pub fn expand_notice(notice: &str, ctx: &ExpandContext<'_>) -> Result<String> {
    ExpanderChain::notice().expand(notice, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{AsciiDocFormatter, MarkdownFormatter};
    use changelog_yaml_core::{ChangelogYamlError, DocumentError, RenderError};

    fn markdown_ctx() -> ExpandContext<'static> {
        ExpandContext::new("https://github.com/", "org/core", &MarkdownFormatter)
    }

    #[test]
    fn test_context_urls() {
        let ctx = markdown_ctx();
        assert_eq!(ctx.host, "https://github.com");
        assert_eq!(ctx.repo_url("pull/5"), "https://github.com/org/core/pull/5");
        assert_eq!(ctx.profile_url("alice"), "https://github.com/alice");
    }

    #[test]
    fn test_line_without_references_unchanged() {
        let ctx = markdown_ctx();
        let line = "Plain text, nothing to see: here (really)";
        assert_eq!(expand_line(line, &ctx).unwrap(), line);
        assert_eq!(expand_notice(line, &ctx).unwrap(), line);
        assert_eq!(expand_line("", &ctx).unwrap(), "");
    }

    #[test]
    fn test_full_line_chain() {
        let ctx = markdown_ctx();
        let out = expand_line("Initial support #5 by @alice in $abc123", &ctx).unwrap();
        assert_eq!(
            out,
            "Initial support [#5](https://github.com/org/core/pull/5) by \
             [@alice](https://github.com/alice) in \
             [abc123](https://github.com/org/core/commit/abc123)"
        );
    }

    #[test]
    fn test_replacement_text_not_rescanned() {
        // A host containing '@' and '$' would be picked up again by the
        // mention and commit expanders if rendered text were rescanned.
        let ctx = ExpandContext::new("https://git@host.example/$x", "org/core", &MarkdownFormatter);
        let out = expand_line("See #7", &ctx).unwrap();
        assert_eq!(out, "See [#7](https://git@host.example/$x/org/core/pull/7)");
    }

    #[test]
    fn test_adjacent_references() {
        let ctx = markdown_ctx();
        let out = expand_line("#1#2", &ctx).unwrap();
        assert_eq!(
            out,
            "[#1](https://github.com/org/core/pull/1)[#2](https://github.com/org/core/pull/2)"
        );
    }

    #[test]
    fn test_chain_order() {
        assert_eq!(
            ExpanderChain::line().names(),
            vec!["pull-request", "commit-hash", "profile"]
        );
        assert_eq!(ExpanderChain::notice().names(), vec!["admonition", "profile"]);
        assert!(ExpanderChain::empty().names().is_empty());
    }

    #[test]
    fn test_notice_chain_asciidoc() {
        let ctx = ExpandContext::new("https://github.com", "org/core", &AsciiDocFormatter);
        let out = expand_notice("Thanks @bob. WARNING: ask @carol first", &ctx).unwrap();
        assert_eq!(
            out,
            "Thanks https://github.com/bob[@bob]. WARNING: ask https://github.com/carol[@carol] first"
        );
    }

    #[test]
    fn test_errors_propagate_through_chain() {
        let ctx = markdown_ctx();
        let err = expand_line("Issue # missing", &ctx).unwrap_err();
        assert!(matches!(
            err,
            ChangelogYamlError::Render(RenderError::MalformedPullRequest { .. })
        ));

        let err = expand_notice("TIP: not yet", &ctx).unwrap_err();
        assert!(matches!(
            err,
            ChangelogYamlError::Document(DocumentError::UnsupportedAdmonition(_))
        ));
    }
}
