//! Changelog document model

use std::collections::BTreeMap;

use changelog_yaml_core::DocumentError;
use serde::Deserialize;

use crate::category::Category;

/// Root of a changelog document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangelogDocument {
    /// Repository path (e.g. `org/project`) that release tags link to
    #[serde(default)]
    pub repo: String,
    /// Releases in document order
    #[serde(default)]
    pub releases: Vec<Release>,
    /// Repository definitions keyed by short name
    #[serde(default)]
    pub repos: BTreeMap<String, RepositoryDefinition>,
}

/// A repository that releases can list changes for
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryDefinition {
    /// Canonical repository path (e.g. `org/project`)
    pub repo: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Appended to the repository heading when present
    #[serde(default)]
    pub description: Option<String>,
}

/// A single release
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release name, also used as the tag name
    pub name: String,
    /// Release date, rendered verbatim
    #[serde(default)]
    pub date: String,
    /// Free text shown below the release heading
    #[serde(default)]
    pub notice: Option<String>,
    /// Changes per repository short name. Iterates in lexicographic order.
    #[serde(default)]
    pub repos: BTreeMap<String, Changes>,
}

/// Categorized change lines of one repository within one release.
///
/// Unknown category keys fail deserialization. A key with no value is the
/// same as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<Category, Option<Vec<String>>>")]
pub struct Changes {
    entries: BTreeMap<Category, Vec<String>>,
}

impl From<BTreeMap<Category, Option<Vec<String>>>> for Changes {
    fn from(raw: BTreeMap<Category, Option<Vec<String>>>) -> Self {
        Self {
            entries: raw
                .into_iter()
                .map(|(category, lines)| (category, lines.unwrap_or_default()))
                .collect(),
        }
    }
}

impl Changes {
    /// Create an empty changes bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Append lines to a category
    pub fn with<I, S>(mut self, category: Category, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(category)
            .or_default()
            .extend(lines.into_iter().map(Into::into));
        self
    }

    /// Lines of a category, in source order
    pub fn lines(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-empty categories in render priority order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::PRIORITY
            .into_iter()
            .map(|category| (category, self.lines(category)))
            .filter(|(_, lines)| !lines.is_empty())
    }

    /// Total number of lines across all categories
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Check if there are no lines at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RepositoryDefinition {
    /// Create a definition for a repository path
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            name: None,
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description, if present and not blank
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

impl Release {
    /// Create a release with no changes
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            notice: None,
            repos: BTreeMap::new(),
        }
    }

    /// Set the notice
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    /// Add changes for a repository short name
    pub fn with_changes(mut self, repository: impl Into<String>, changes: Changes) -> Self {
        self.repos.insert(repository.into(), changes);
        self
    }

    /// Notice, if present and not blank
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref().filter(|n| !n.is_empty())
    }
}

impl ChangelogDocument {
    /// Create an empty document for a default repository
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            releases: Vec::new(),
            repos: BTreeMap::new(),
        }
    }

    /// Add a repository definition
    pub fn with_repository(
        mut self,
        short_name: impl Into<String>,
        definition: RepositoryDefinition,
    ) -> Self {
        self.repos.insert(short_name.into(), definition);
        self
    }

    /// Append a release
    pub fn with_release(mut self, release: Release) -> Self {
        self.releases.push(release);
        self
    }

    /// Look up the definition for a repository referenced by a release
    pub fn resolve_repository(
        &self,
        release: &Release,
        short_name: &str,
    ) -> Result<&RepositoryDefinition, DocumentError> {
        self.repos
            .get(short_name)
            .ok_or_else(|| DocumentError::MissingRepository {
                release: release.name.clone(),
                repository: short_name.to_string(),
            })
    }

    /// Collect every structural problem in the document.
    ///
    /// Reference syntax inside lines is not inspected here; see
    /// [`crate::DocumentRenderer::check_references`].
    pub fn validate(&self) -> Vec<DocumentError> {
        let mut problems = Vec::new();

        for (short_name, definition) in &self.repos {
            if definition.repo.trim().is_empty() {
                problems.push(DocumentError::InvalidRepository {
                    repository: short_name.clone(),
                    message: "repository path cannot be empty".to_string(),
                });
            }
        }

        for release in &self.releases {
            for short_name in release.repos.keys() {
                if let Err(e) = self.resolve_repository(release, short_name) {
                    problems.push(e);
                }
            }
        }

        problems
    }

    /// Total number of change lines across all releases
    pub fn line_count(&self) -> usize {
        self.releases
            .iter()
            .flat_map(|r| r.repos.values())
            .map(Changes::len)
            .sum()
    }
}
