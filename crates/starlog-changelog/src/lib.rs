//! Starlog Changelog - changelog generation from conventional commits
//!
//! This crate turns a repository's commit history into a Markdown changelog:
//! commits are parsed against the conventional commit grammar, grouped into
//! releases at tag boundaries, linked against a remote URL when one is known,
//! and rendered into the final document.

pub mod aggregator;
pub mod generator;
pub mod links;
pub mod parser;
pub mod renderer;
pub mod types;

pub use aggregator::ReleaseAggregator;
pub use generator::ChangelogGenerator;
pub use links::{LinkResolver, RemoteInfo};
pub use parser::{CommitParser, ConventionalParser};
pub use renderer::{ChangelogRenderer, MarkdownRenderer};
pub use types::{Category, Changelog, ParsedCommit, Release, Section};
