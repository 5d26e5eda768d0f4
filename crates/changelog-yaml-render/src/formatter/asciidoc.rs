//! AsciiDoc formatter

use super::{AdmonitionKind, Formatter};
use crate::emoji::Icon;

/// AsciiDoc formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiDocFormatter;

impl AsciiDocFormatter {
    /// Create a new AsciiDoc formatter
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for AsciiDocFormatter {
    fn heading(&self, level: usize, text: &str) -> String {
        format!("{} {}\n\n", "=".repeat(level), text)
    }

    fn bullet_point(&self, text: &str) -> String {
        format!("* {}\n", text)
    }

    // Numeric character reference, since AsciiDoc has no shortcodes.
    fn icon(&self, icon: Icon) -> String {
        format!("&#x{:X};", icon.code_point())
    }

    fn link(&self, text: &str, url: &str) -> String {
        format!("{}[{}]", url, text)
    }

    fn admonition(&self, kind: AdmonitionKind, text: &str) -> String {
        format!("{}: {}", kind.keyword(), text)
    }

    fn name(&self) -> &'static str {
        "asciidoc"
    }

    fn extension(&self) -> &'static str {
        "adoc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        let formatter = AsciiDocFormatter::new();
        assert_eq!(formatter.heading(1, "Changelog"), "= Changelog\n\n");
        assert_eq!(formatter.heading(2, "v1"), "== v1\n\n");
    }

    #[test]
    fn test_icon_is_character_reference() {
        let formatter = AsciiDocFormatter::new();
        assert_eq!(formatter.icon(Icon::Bookmark), "&#x1F516;");
        assert_eq!(formatter.icon(Icon::Zap), "&#x26A1;");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            AsciiDocFormatter::new().link("@alice", "https://github.com/alice"),
            "https://github.com/alice[@alice]"
        );
    }

    #[test]
    fn test_admonition() {
        assert_eq!(
            AsciiDocFormatter::new().admonition(AdmonitionKind::Note, "read this"),
            "NOTE: read this"
        );
    }
}
