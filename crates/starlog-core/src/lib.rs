//! Starlog Core - shared types for changelog generation
//!
//! This crate provides the error taxonomy and configuration types used by
//! the other starlog crates.

pub mod config;
pub mod error;

pub use config::ChangelogOptions;
pub use error::{ChangelogError, ConfigError, GitError, Result, StarlogError};
