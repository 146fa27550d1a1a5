//! Conventional Commits parser
//!
//! Parses commits following the Conventional Commits specification:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use super::CommitParser;
use crate::types::{Category, ParsedCommit};
use starlog_git::CommitInfo;

/// Regex for parsing conventional commit messages
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[a-zA-Z]+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: (?P<description>.+)$",
    )
    .expect("Invalid regex")
});

/// Regex for issue references in descriptions
static ISSUE_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("Invalid regex"));

/// Parser for Conventional Commits format
#[derive(Debug, Default)]
pub struct ConventionalParser;

impl ConventionalParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

/// Map a recognized type token to its category
///
/// Returns `None` for unrecognized tokens, which makes the whole message
/// fall back to [`Category::Other`] with the summary line as description.
fn category_for_type(token: &str) -> Option<Category> {
    match token.to_lowercase().as_str() {
        "feat" | "feature" => Some(Category::Feature),
        "fix" | "bugfix" => Some(Category::Fix),
        "docs" | "doc" | "style" | "refactor" | "perf" | "performance" | "test" | "tests"
        | "build" | "ci" | "chore" | "revert" => Some(Category::Other),
        _ => None,
    }
}

/// Check for a BREAKING CHANGE footer in the commit body
fn has_breaking_footer(body: Option<&str>) -> bool {
    body.is_some_and(|body| {
        body.lines().any(|line| {
            line.starts_with("BREAKING CHANGE:") || line.starts_with("BREAKING-CHANGE:")
        })
    })
}

/// Extract `#<digits>` issue references in order of first appearance,
/// duplicates removed
fn extract_issue_refs(description: &str) -> Vec<u64> {
    let mut refs = Vec::new();

    for cap in ISSUE_REF_REGEX.captures_iter(description) {
        if let Ok(n) = cap[1].parse::<u64>() {
            if !refs.contains(&n) {
                refs.push(n);
            }
        }
    }

    refs
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &CommitInfo) -> ParsedCommit {
        let matched = CONVENTIONAL_REGEX.captures(&commit.message).and_then(|caps| {
            let category = category_for_type(&caps["type"])?;
            let scope = caps.name("scope").map(|m| m.as_str().to_string());
            let breaking =
                caps.name("breaking").is_some() || has_breaking_footer(commit.body.as_deref());
            let description = caps["description"].to_string();
            Some((category, scope, breaking, description))
        });

        let (category, scope, description) = match matched {
            Some((category, scope, breaking, description)) => {
                let category = if breaking { Category::Breaking } else { category };
                (category, scope, description)
            }
            // Non-matching messages are a valid variant, not a failure
            None => (Category::Other, None, commit.message.clone()),
        };

        let issue_refs = extract_issue_refs(&description);

        ParsedCommit {
            hash: commit.hash.clone(),
            short_hash: commit.short_hash.clone(),
            category,
            scope,
            description,
            issue_refs,
            timestamp: commit.timestamp,
            commit_link: None,
        }
    }
}
