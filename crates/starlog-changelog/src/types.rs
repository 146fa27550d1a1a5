//! Changelog types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Change category of a parsed commit
///
/// Declaration order is the fixed display order within a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Incompatible API change
    Breaking,
    /// New feature
    Feature,
    /// Bug fix
    Fix,
    /// Everything else, including messages that don't match the grammar
    Other,
}

impl Category {
    /// All categories in display order
    pub const DISPLAY_ORDER: [Category; 4] = [
        Category::Breaking,
        Category::Feature,
        Category::Fix,
        Category::Other,
    ];

    /// Section heading used when rendering
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Breaking => "Breaking Changes",
            Category::Feature => "Features",
            Category::Fix => "Bug Fixes",
            Category::Other => "Other Changes",
        }
    }
}

/// A commit interpreted against the conventional commit grammar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Original commit hash
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Change category
    pub category: Category,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Commit description
    pub description: String,
    /// Issue numbers referenced in the description, in order of first
    /// appearance, duplicate-free
    pub issue_refs: Vec<u64>,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Hyperlink to the commit, filled in by the link resolver
    pub commit_link: Option<String>,
}

/// A category bucket within a release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Category this section holds
    pub category: Category,
    /// Commits in this section, newest first
    pub commits: Vec<ParsedCommit>,
}

impl Section {
    /// Create a new empty section
    pub fn new(category: Category) -> Self {
        Self {
            category,
            commits: Vec::new(),
        }
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// A release in the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Tag name; `None` marks the unreleased bucket
    pub name: Option<String>,
    /// Release date; `None` for the unreleased bucket
    pub date: Option<DateTime<Utc>>,
    /// Non-empty category sections, in display order
    pub sections: Vec<Section>,
}

impl Release {
    /// Create a release with no sections yet
    pub fn new(name: Option<String>, date: Option<DateTime<Utc>>) -> Self {
        Self {
            name,
            date,
            sections: Vec::new(),
        }
    }

    /// Add a section, dropping it when empty
    pub fn add_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Check if the release has any content
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// The root output model, rendered 1:1 into text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Changelog {
    /// Document title
    pub title: String,
    /// Optional description block
    pub description: Option<String>,
    /// Releases, newest first
    pub releases: Vec<Release>,
}

impl Changelog {
    /// Create a changelog with no releases
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            releases: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        assert_eq!(Category::DISPLAY_ORDER[0], Category::Breaking);
        assert_eq!(Category::DISPLAY_ORDER[1], Category::Feature);
        assert_eq!(Category::DISPLAY_ORDER[2], Category::Fix);
        assert_eq!(Category::DISPLAY_ORDER[3], Category::Other);
    }

    #[test]
    fn test_empty_section_dropped() {
        let mut release = Release::new(Some("v1.0.0".to_string()), None);
        release.add_section(Section::new(Category::Feature));
        assert!(release.is_empty());
    }

    #[test]
    fn test_headings() {
        assert_eq!(Category::Breaking.heading(), "Breaking Changes");
        assert_eq!(Category::Fix.heading(), "Bug Fixes");
    }
}
