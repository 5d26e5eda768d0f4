//! changelog-yaml Render - Turns a YAML changelog description into a document
//!
//! The parsed [`ChangelogDocument`] is walked by the [`DocumentRenderer`],
//! which runs every change line through the inline reference expanders and
//! emits markup through a [`Formatter`] (Markdown or AsciiDoc).

pub mod category;
pub mod emoji;
pub mod expand;
pub mod formatter;
pub mod input;
pub mod renderer;
pub mod types;

pub use category::{Category, CategoryInfo};
pub use emoji::Icon;
pub use expand::{expand_line, expand_notice, ExpandContext, Expander, ExpanderChain};
pub use formatter::{
    AdmonitionKind, AsciiDocFormatter, Formatter, FormatterRegistry, MarkdownFormatter,
    OutputFormat,
};
pub use input::{load_document, parse_document, read_document};
pub use renderer::{DocumentRenderer, RenderOptions};
pub use types::{ChangelogDocument, Changes, Release, RepositoryDefinition};
