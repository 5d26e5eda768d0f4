//! Output formatters

mod asciidoc;
mod markdown;
mod registry;

pub use asciidoc::AsciiDocFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;

use std::fmt;
use std::str::FromStr;

use changelog_yaml_core::DocumentError;
use tracing::warn;

use crate::emoji::Icon;

/// Trait for document formatters.
///
/// Every method returns a finished fragment of markup; the renderer only
/// concatenates fragments.
pub trait Formatter: Send + Sync {
    /// Heading of the given level, followed by a blank line
    fn heading(&self, level: usize, text: &str) -> String;

    /// Bullet list item, terminated by a newline
    fn bullet_point(&self, text: &str) -> String;

    /// Inline icon
    fn icon(&self, icon: Icon) -> String;

    /// Inline link
    fn link(&self, text: &str, url: &str) -> String;

    /// Callout block
    fn admonition(&self, kind: AdmonitionKind, text: &str) -> String;

    /// Format name (e.g. "markdown")
    fn name(&self) -> &'static str;

    /// File extension for this format
    fn extension(&self) -> &'static str;
}

/// Kind of callout block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdmonitionKind {
    Note,
    Important,
    Warning,
}

impl AdmonitionKind {
    /// Upper-case keyword as written in documents
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Note => "NOTE",
            Self::Important => "IMPORTANT",
            Self::Warning => "WARNING",
        }
    }
}

impl fmt::Display for AdmonitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for AdmonitionKind {
    type Err = DocumentError;

    // TIP and CAUTION are valid admonition keywords but have no rendering yet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOTE" => Ok(Self::Note),
            "IMPORTANT" => Ok(Self::Important),
            "WARNING" => Ok(Self::Warning),
            _ => Err(DocumentError::UnsupportedAdmonition(s.to_string())),
        }
    }
}

/// Output format selected on the command line or in configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown with GitHub shortcodes and alerts
    #[default]
    Markdown,
    /// AsciiDoc
    AsciiDoc,
}

impl OutputFormat {
    /// Resolve a format selector. Unrecognized selectors fall back to Markdown.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "md" | "markdown" => Self::Markdown,
            "adoc" | "asciidoc" => Self::AsciiDoc,
            other => {
                warn!(selector = other, "unknown output format, falling back to markdown");
                Self::Markdown
            }
        }
    }

    /// File extension of the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::AsciiDoc => "adoc",
        }
    }
}
