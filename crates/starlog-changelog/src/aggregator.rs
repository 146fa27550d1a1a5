//! Release aggregation
//!
//! Walks parsed commits newest-first and splits them into releases at tag
//! boundaries, bucketing each release by category in the fixed display
//! order.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::types::{Category, ParsedCommit, Release, Section};
use starlog_core::ChangelogOptions;
use starlog_git::TagInfo;

/// Groups parsed commits into releases
pub struct ReleaseAggregator {
    include_unreleased: bool,
    include_other: bool,
}

impl ReleaseAggregator {
    /// Create an aggregator from changelog options
    pub fn new(options: &ChangelogOptions) -> Self {
        Self {
            include_unreleased: options.include_unreleased,
            include_other: options.include_other,
        }
    }

    /// Group commits into releases at tag boundaries
    ///
    /// `commits` must be ordered newest-first; the commits ahead of the
    /// first tagged commit form the unreleased bucket, and each tagged
    /// commit opens the release it belongs to.
    #[instrument(skip_all, fields(commit_count = commits.len(), tag_count = tags.len()))]
    pub fn aggregate(&self, commits: Vec<ParsedCommit>, tags: &[TagInfo]) -> Vec<Release> {
        let tag_index: HashMap<&str, &TagInfo> = tags
            .iter()
            .map(|tag| (tag.commit_hash.as_str(), tag))
            .collect();

        let mut releases = Vec::new();
        let mut name: Option<String> = None;
        let mut date: Option<DateTime<Utc>> = None;
        let mut bucket: Vec<ParsedCommit> = Vec::new();

        for commit in commits {
            if let Some(tag) = tag_index.get(commit.hash.as_str()) {
                // Tag boundary: close the current bucket and open the
                // release this tag names, dated by the annotated tag or the
                // tagged commit itself
                self.push_release(&mut releases, name.take(), date.take(), &mut bucket);
                name = Some(tag.name.clone());
                date = Some(tag.timestamp.unwrap_or(commit.timestamp));
            }
            bucket.push(commit);
        }

        self.push_release(&mut releases, name, date, &mut bucket);

        debug!(release_count = releases.len(), "aggregated releases");
        releases
    }

    /// Bucket a release's commits by category and emit it unless empty
    fn push_release(
        &self,
        releases: &mut Vec<Release>,
        name: Option<String>,
        date: Option<DateTime<Utc>>,
        bucket: &mut Vec<ParsedCommit>,
    ) {
        let commits = std::mem::take(bucket);
        let unreleased = name.is_none();

        if unreleased && !self.include_unreleased {
            return;
        }

        let mut release = Release::new(name, date);

        for category in Category::DISPLAY_ORDER {
            // The unreleased bucket keeps every category; named releases
            // drop "other" unless configured to keep it
            if category == Category::Other && !unreleased && !self.include_other {
                continue;
            }

            let mut section = Section::new(category);
            section.commits = commits
                .iter()
                .filter(|c| c.category == category)
                .cloned()
                .collect();
            release.add_section(section);
        }

        if !release.is_empty() {
            releases.push(release);
        }
    }
}
