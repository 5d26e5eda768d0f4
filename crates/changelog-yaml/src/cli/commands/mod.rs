//! CLI commands

mod completions;
mod render;
mod validate;

pub use completions::CompletionsCommand;
pub use render::RenderCommand;
pub use validate::ValidateCommand;

use std::path::Path;

use changelog_yaml_core::Result;
use changelog_yaml_render::{load_document, read_document, ChangelogDocument};

/// Read the changelog document from a file, or from stdin when no path (or
/// `-`) is given
fn read_input(path: Option<&Path>) -> Result<ChangelogDocument> {
    match path {
        Some(path) if path != Path::new("-") => load_document(path),
        _ => read_document(std::io::stdin().lock(), "<stdin>"),
    }
}
