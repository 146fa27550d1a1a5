//! Commit parsing

mod conventional;

pub use conventional::ConventionalParser;

use crate::types::ParsedCommit;
use starlog_git::CommitInfo;

/// Trait for commit parsers
///
/// Parsing is total: every commit maps to exactly one [`ParsedCommit`],
/// messages that don't match the grammar included.
pub trait CommitParser: Send + Sync {
    /// Parse a commit into a structured format
    fn parse(&self, commit: &CommitInfo) -> ParsedCommit;
}
