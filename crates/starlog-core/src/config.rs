//! Changelog generation options
//!
//! Options come from two places: an optional `.starlog.toml` in the
//! repository root, and CLI flags which override the file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// File name searched for in the repository root
pub const CONFIG_FILE_NAME: &str = ".starlog.toml";

/// Options controlling changelog generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogOptions {
    /// Document title
    pub title: String,

    /// Optional description block rendered under the title
    pub description: Option<String>,

    /// Output file path
    pub output: PathBuf,

    /// Remote name used to resolve issue and commit links
    pub remote: String,

    /// Emit the in-progress bucket of commits newer than the latest tag
    pub include_unreleased: bool,

    /// Keep commits of category "other" in named releases
    pub include_other: bool,

    /// Remote URL resolved from the repository at runtime
    #[serde(skip)]
    pub remote_url: Option<String>,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            title: "Changelog".to_string(),
            description: None,
            output: PathBuf::from("CHANGELOG.md"),
            remote: "origin".to_string(),
            include_unreleased: false,
            include_other: false,
            remote_url: None,
        }
    }
}

impl ChangelogOptions {
    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let options = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded changelog options");
        Ok(options)
    }

    /// Load options from `.starlog.toml` in the given directory, falling
    /// back to defaults when the file does not exist
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the remote URL used for link resolution
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = Some(url.into());
        self
    }
}
