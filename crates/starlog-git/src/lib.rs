//! Starlog Git - read-only git history access
//!
//! This crate enumerates commit history, tags and remotes for changelog
//! generation. It never mutates repository state.

mod commits;
mod remote;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
