//! Change categories

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::emoji::Icon;

/// Category of a change line.
///
/// Variants are declared in render order, so the derived `Ord` matches
/// [`Category::PRIORITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Not yet part of a tagged release
    Unreleased,
    /// Breaks compatibility
    Breaking,
    /// New functionality
    Added,
    /// Bug fix
    Fixed,
    /// Works around an issue elsewhere
    Workaround,
    /// Change in existing behavior
    Changed,
    /// Removed functionality
    Removed,
    /// Improvement of existing functionality
    Improved,
    /// Documentation
    Docs,
    /// Tests
    Tests,
    /// Refactoring without behavior change
    Refactored,
    /// Marked for future removal
    Deprecated,
    /// Experimental functionality
    Experimental,
    /// Known issue
    Noted,
    /// Performance improvement
    Performance,
    /// Code style
    Style,
}

/// Display information for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Icon emitted in front of every line
    pub icon: Icon,
    /// Human readable label
    pub label: &'static str,
}

impl Category {
    /// Order in which categories are rendered within a repository
    pub const PRIORITY: [Category; 16] = [
        Category::Unreleased,
        Category::Breaking,
        Category::Added,
        Category::Fixed,
        Category::Workaround,
        Category::Changed,
        Category::Removed,
        Category::Improved,
        Category::Docs,
        Category::Tests,
        Category::Refactored,
        Category::Deprecated,
        Category::Experimental,
        Category::Noted,
        Category::Performance,
        Category::Style,
    ];

    /// Icon and label for this category
    pub fn info(&self) -> CategoryInfo {
        let (icon, label) = match self {
            Self::Unreleased => (Icon::Construction, "unreleased"),
            Self::Breaking => (Icon::TriangularFlagOnPost, "breaking"),
            Self::Added => (Icon::Star2, "added"),
            Self::Fixed => (Icon::LadyBeetle, "fixed"),
            Self::Workaround => (Icon::SeeNoEvil, "workaround"),
            Self::Changed => (Icon::HammerAndWrench, "changed"),
            Self::Removed => (Icon::Fire, "removed"),
            Self::Improved => (Icon::Art, "improved"),
            Self::Docs => (Icon::Book, "docs"),
            Self::Tests => (Icon::VerticalTrafficLight, "test"),
            Self::Refactored => (Icon::Recycle, "refactor"),
            Self::Deprecated => (Icon::SpiderWeb, "deprecated"),
            Self::Experimental => (Icon::Alembic, "experimental"),
            Self::Noted => (Icon::Beetle, "known issue"),
            Self::Performance => (Icon::Zap, "performance"),
            Self::Style => (Icon::Lipstick, "style"),
        };
        CategoryInfo { icon, label }
    }

    /// Whether lines of this category carry a bracketed label after the icon
    pub fn is_labeled(&self) -> bool {
        matches!(self, Self::Breaking)
    }

    /// Key used for this category in changelog documents
    pub fn key(&self) -> &'static str {
        match self {
            Self::Unreleased => "unreleased",
            Self::Breaking => "breaking",
            Self::Added => "added",
            Self::Fixed => "fixed",
            Self::Workaround => "workaround",
            Self::Changed => "changed",
            Self::Removed => "removed",
            Self::Improved => "improved",
            Self::Docs => "docs",
            Self::Tests => "tests",
            Self::Refactored => "refactored",
            Self::Deprecated => "deprecated",
            Self::Experimental => "experimental",
            Self::Noted => "noted",
            Self::Performance => "performance",
            Self::Style => "style",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_matches_declaration_order() {
        let mut sorted = Category::PRIORITY;
        sorted.sort();
        assert_eq!(sorted, Category::PRIORITY);
    }

    #[test]
    fn test_only_breaking_is_labeled() {
        let labeled: Vec<_> = Category::PRIORITY
            .iter()
            .filter(|c| c.is_labeled())
            .collect();
        assert_eq!(labeled, vec![&Category::Breaking]);
    }

    #[test]
    fn test_info() {
        let info = Category::Noted.info();
        assert_eq!(info.icon, Icon::Beetle);
        assert_eq!(info.label, "known issue");
        assert_eq!(Category::Tests.info().label, "test");
    }

    #[test]
    fn test_keys_deserialize() {
        for category in Category::PRIORITY {
            let parsed: Category = serde_yaml::from_str(category.key()).unwrap();
            assert_eq!(parsed, category);
        }
        assert!(serde_yaml::from_str::<Category>("security").is_err());
    }
}
