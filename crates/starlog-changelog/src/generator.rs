//! Changelog generation pipeline
//!
//! Composes the stages in order: parse, aggregate into releases, resolve
//! links, render. Each stage is a pure transform over the previous one.

use tracing::{debug, info, instrument};

use crate::aggregator::ReleaseAggregator;
use crate::links::LinkResolver;
use crate::parser::{CommitParser, ConventionalParser};
use crate::renderer::{ChangelogRenderer, MarkdownRenderer};
use crate::types::Changelog;
use starlog_core::ChangelogOptions;
use starlog_git::{CommitInfo, TagInfo};

/// Changelog generator
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    renderer: Box<dyn ChangelogRenderer>,
    options: ChangelogOptions,
}

impl ChangelogGenerator {
    /// Create a new generator with default parser and renderer
    pub fn new(options: ChangelogOptions) -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
            renderer: Box::new(MarkdownRenderer::new()),
            options,
        }
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a custom renderer
    pub fn with_renderer<R: ChangelogRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Build the changelog model from commit history
    #[instrument(skip_all, fields(commit_count = commits.len(), tag_count = tags.len()))]
    pub fn generate(&self, commits: &[CommitInfo], tags: &[TagInfo]) -> Changelog {
        info!(
            commit_count = commits.len(),
            tag_count = tags.len(),
            "generating changelog"
        );

        let parsed = commits.iter().map(|c| self.parser.parse(c)).collect();

        let aggregator = ReleaseAggregator::new(&self.options);
        let releases = aggregator.aggregate(parsed, tags);

        let mut changelog = Changelog::new(
            self.options.title.clone(),
            self.options.description.clone(),
        );
        changelog.releases = releases;

        let resolver = LinkResolver::new(self.options.remote_url.as_deref());
        let changelog = resolver.resolve(changelog);

        debug!(release_count = changelog.releases.len(), "changelog model built");
        changelog
    }

    /// Render a changelog model to text
    pub fn render(&self, changelog: &Changelog) -> String {
        self.renderer.render(changelog)
    }

    /// Generate and render in one step
    pub fn generate_formatted(&self, commits: &[CommitInfo], tags: &[TagInfo]) -> String {
        let changelog = self.generate(commits, tags);
        self.render(&changelog)
    }
}
