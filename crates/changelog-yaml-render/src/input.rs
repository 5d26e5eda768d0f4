//! Reading changelog documents

use std::io::Read;
use std::path::Path;

use changelog_yaml_core::{DocumentError, Result};
use tracing::{debug, info};

use crate::types::ChangelogDocument;

/// Parse a changelog document from YAML text
pub fn parse_document(yaml: &str) -> Result<ChangelogDocument> {
    let document: ChangelogDocument = serde_yaml::from_str(yaml).map_err(DocumentError::Parse)?;
    debug!(
        releases = document.releases.len(),
        repositories = document.repos.len(),
        "changelog document parsed"
    );
    Ok(document)
}

/// Read a whole changelog document from a reader (e.g. stdin).
///
/// `source` names the reader in error messages.
pub fn read_document<R: Read>(mut reader: R, source: &str) -> Result<ChangelogDocument> {
    info!(source, "reading changelog document");
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| DocumentError::Read {
            path: source.to_string(),
            source: e,
        })?;

    parse_document(&content)
}

/// Load a changelog document from a file
pub fn load_document(path: &Path) -> Result<ChangelogDocument> {
    info!(path = %path.display(), "loading changelog document");
    let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_document(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use changelog_yaml_core::ChangelogYamlError;
    use tempfile::TempDir;

    const MINIMAL: &str = "repo: org/core\nreleases: []\nrepos: {}\n";

    #[test]
    fn test_read_document_from_reader() {
        let doc = read_document(MINIMAL.as_bytes(), "<stdin>").unwrap();
        assert_eq!(doc.repo, "org/core");
        assert!(doc.releases.is_empty());
    }

    #[test]
    fn test_load_document_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("changelog.yaml");
        std::fs::write(&path, MINIMAL).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.repo, "org/core");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load_document(&temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(
            err,
            ChangelogYamlError::Document(DocumentError::Read { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = parse_document("releases: [unterminated").unwrap_err();
        assert!(matches!(
            err,
            ChangelogYamlError::Document(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_mapping_is_empty_document() {
        let doc = parse_document("{}").unwrap();
        assert!(doc.releases.is_empty());
        assert!(doc.repos.is_empty());
    }
}
