//! Formatter registry

use std::sync::Arc;

use tracing::debug;

use super::{AsciiDocFormatter, Formatter, MarkdownFormatter, OutputFormat};

/// Registry of available formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(MarkdownFormatter::new()),
                Arc::new(AsciiDocFormatter::new()),
            ],
        }
    }

    /// Get formatter by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn Formatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Get the formatter for an output format
    pub fn for_format(&self, format: OutputFormat) -> Arc<dyn Formatter> {
        self.get(format.extension())
            .unwrap_or_else(|| Arc::new(MarkdownFormatter::new()))
    }

    /// Resolve a format selector, falling back to Markdown
    pub fn resolve(&self, selector: &str) -> Arc<dyn Formatter> {
        let formatter = self.for_format(OutputFormat::from_selector(selector));
        debug!(selector, formatter = formatter.name(), "resolved formatter");
        formatter
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
