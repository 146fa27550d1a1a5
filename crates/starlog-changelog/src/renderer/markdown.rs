//! Markdown changelog renderer

use std::fmt::Write;

use tracing::debug;

use super::ChangelogRenderer;
use crate::types::{Changelog, Release};

/// Markdown changelog renderer
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self
    }

    fn render_release(&self, output: &mut String, release: &Release) {
        output.push('\n');
        match &release.name {
            Some(name) => {
                output.push_str("## ");
                output.push_str(name);
                if let Some(date) = &release.date {
                    let _ = write!(output, " ({})", date.format("%Y-%m-%d"));
                }
            }
            None => output.push_str("## Unreleased"),
        }
        output.push('\n');

        for section in &release.sections {
            let _ = write!(output, "\n### {}\n\n", section.category.heading());

            for commit in &section.commits {
                output.push_str("- ");
                if let Some(scope) = &commit.scope {
                    let _ = write!(output, "**{}:** ", scope);
                }
                output.push_str(&commit.description);
                match &commit.commit_link {
                    Some(link) => {
                        let _ = write!(output, " ([{}]({}))", commit.short_hash, link);
                    }
                    None => {
                        let _ = write!(output, " ({})", commit.short_hash);
                    }
                }
                output.push('\n');
            }
        }
    }
}

impl ChangelogRenderer for MarkdownRenderer {
    fn render(&self, changelog: &Changelog) -> String {
        let mut output = format!("# {}\n", changelog.title);

        if let Some(description) = &changelog.description {
            let _ = write!(output, "\n{}\n", description);
        }

        for release in &changelog.releases {
            self.render_release(&mut output, release);
        }

        debug!(output_len = output.len(), "markdown changelog rendered");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
