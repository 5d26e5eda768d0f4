//! Markdown formatter

use super::{AdmonitionKind, Formatter};
use crate::emoji::Icon;

/// Markdown formatter.
///
/// Icons are left as `:shortcode:` for the hosting platform to render and
/// admonitions use GitHub alert syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for MarkdownFormatter {
    fn heading(&self, level: usize, text: &str) -> String {
        format!("{} {}\n\n", "#".repeat(level), text)
    }

    fn bullet_point(&self, text: &str) -> String {
        format!("* {}\n", text)
    }

    fn icon(&self, icon: Icon) -> String {
        format!(":{}:", icon.name())
    }

    fn link(&self, text: &str, url: &str) -> String {
        format!("[{}]({})", text, url)
    }

    fn admonition(&self, kind: AdmonitionKind, text: &str) -> String {
        format!("> [!{}]\\\n> {}", kind.keyword(), text)
    }

    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        let formatter = MarkdownFormatter::new();
        assert_eq!(formatter.heading(1, "Changelog"), "# Changelog\n\n");
        assert_eq!(formatter.heading(3, "core"), "### core\n\n");
    }

    #[test]
    fn test_bullet_point() {
        assert_eq!(MarkdownFormatter::new().bullet_point("item"), "* item\n");
    }

    #[test]
    fn test_icon_is_shortcode() {
        assert_eq!(MarkdownFormatter::new().icon(Icon::Star2), ":star2:");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            MarkdownFormatter::new().link("#5", "https://github.com/org/core/pull/5"),
            "[#5](https://github.com/org/core/pull/5)"
        );
    }

    #[test]
    fn test_admonition_uses_alert_syntax() {
        assert_eq!(
            MarkdownFormatter::new().admonition(AdmonitionKind::Warning, "mind the gap"),
            "> [!WARNING]\\\n> mind the gap"
        );
    }
}
