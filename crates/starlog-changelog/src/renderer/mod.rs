//! Changelog renderers

mod markdown;

pub use markdown::MarkdownRenderer;

use crate::types::Changelog;

/// Trait for changelog renderers
pub trait ChangelogRenderer: Send + Sync {
    /// Serialize a changelog to its final text form
    ///
    /// Rendering is deterministic: identical input yields byte-identical
    /// output.
    fn render(&self, changelog: &Changelog) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
