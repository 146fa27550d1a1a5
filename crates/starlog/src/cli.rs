//! CLI definition and command handling

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use starlog_changelog::ChangelogGenerator;
use starlog_core::error::{ChangelogError, GitError};
use starlog_core::{ChangelogOptions, Result};
use starlog_git::GitRepo;

/// Generate a changelog from conventional commit history
#[derive(Debug, Parser)]
#[command(name = "starlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the git repository
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Changelog title
    #[arg(long)]
    pub title: Option<String>,

    /// Description block rendered under the title
    #[arg(long)]
    pub description: Option<String>,

    /// Output file path, relative paths resolve against the repository root
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Remote whose URL is used for issue and commit links
    #[arg(long)]
    pub remote: Option<String>,

    /// Include commits newer than the latest tag
    #[arg(long)]
    pub unreleased: bool,

    /// Keep uncategorized commits in named releases
    #[arg(long)]
    pub include_other: bool,
}

impl Cli {
    /// Run changelog generation and write the output file
    pub fn execute(&self) -> Result<()> {
        let repo = GitRepo::discover(&self.repo)?;
        let options = self.resolve_options(&repo)?;

        let commits = repo.all_commits()?;
        let tags = repo.tags()?;

        let generator = ChangelogGenerator::new(options.clone());
        let content = generator.generate_formatted(&commits, &tags);

        let output = if options.output.is_absolute() {
            options.output.clone()
        } else {
            repo.path().join(&options.output)
        };

        std::fs::write(&output, &content).map_err(|e| ChangelogError::WriteFailed {
            path: output.clone(),
            reason: e.to_string(),
        })?;

        info!(path = %output.display(), "changelog written");
        Ok(())
    }

    /// Merge `.starlog.toml` defaults with CLI flag overrides and look up
    /// the remote URL
    fn resolve_options(&self, repo: &GitRepo) -> Result<ChangelogOptions> {
        let mut options = ChangelogOptions::load_or_default(repo.path())?;

        if let Some(title) = &self.title {
            options.title = title.clone();
        }
        if let Some(description) = &self.description {
            options.description = Some(description.clone());
        }
        if let Some(output) = &self.output {
            options.output = output.clone();
        }
        if let Some(remote) = &self.remote {
            options.remote = remote.clone();
        }
        if self.unreleased {
            options.include_unreleased = true;
        }
        if self.include_other {
            options.include_other = true;
        }

        // A missing remote never fails the run, references stay unlinked
        options.remote_url = match repo.remote_url(&options.remote) {
            Ok(url) => url,
            Err(GitError::RemoteNotFound(name)) => {
                debug!(remote = %name, "remote not found, leaving references unlinked");
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(options)
    }
}
