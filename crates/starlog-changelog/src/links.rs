//! Issue and commit link resolution
//!
//! When a remote URL is known, issue references in descriptions become
//! Markdown links and each commit gets a hyperlink to its page on the
//! remote. Unrecognized remote formats degrade to unlinked output instead
//! of erroring.

use regex::Regex;
use std::sync::LazyLock;

use tracing::debug;

use crate::types::Changelog;

/// Regex for scp-like remotes: `git@host:owner/repo.git`
static SCP_LIKE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[^@/]+@)?(?P<host>[^:/]+):(?P<owner>[^/]+)/(?P<repo>.+?)(?:\.git)?/?$")
        .expect("Invalid regex")
});

/// Regex for scheme remotes: `https://host/owner/repo`, `ssh://git@host/owner/repo.git`
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?|ssh|git)://(?:[^@/]+@)?(?P<host>[^/:]+)(?::\d+)?/(?P<owner>[^/]+)/(?P<repo>.+?)(?:\.git)?/?$",
    )
    .expect("Invalid regex")
});

/// Regex for issue references in descriptions
static ISSUE_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("Invalid regex"));

/// Coordinates of a repository on its remote host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    /// Remote host (e.g., "github.com")
    pub host: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RemoteInfo {
    /// Parse a remote URL into repository coordinates
    ///
    /// Returns `None` for formats this resolver doesn't recognize.
    pub fn parse(url: &str) -> Option<Self> {
        let caps = SCHEME_REGEX
            .captures(url)
            .or_else(|| SCP_LIKE_REGEX.captures(url))?;

        Some(Self {
            host: caps["host"].to_string(),
            owner: caps["owner"].to_string(),
            repo: caps["repo"].to_string(),
        })
    }

    /// Hyperlink to an issue
    pub fn issue_url(&self, number: u64) -> String {
        format!(
            "https://{}/{}/{}/issues/{}",
            self.host, self.owner, self.repo, number
        )
    }

    /// Hyperlink to a commit
    pub fn commit_url(&self, hash: &str) -> String {
        format!(
            "https://{}/{}/{}/commit/{}",
            self.host, self.owner, self.repo, hash
        )
    }
}

/// Rewrites a changelog's references into hyperlinks
pub struct LinkResolver {
    remote: Option<RemoteInfo>,
}

impl LinkResolver {
    /// Create a resolver from an optional remote URL
    ///
    /// An absent or unrecognized URL produces a resolver that leaves the
    /// changelog untouched.
    pub fn new(remote_url: Option<&str>) -> Self {
        let remote = remote_url.and_then(|url| {
            let parsed = RemoteInfo::parse(url);
            if parsed.is_none() {
                debug!(url, "unrecognized remote URL format, leaving references unlinked");
            }
            parsed
        });

        Self { remote }
    }

    /// Replace issue references and attach commit links
    pub fn resolve(&self, mut changelog: Changelog) -> Changelog {
        let Some(remote) = &self.remote else {
            return changelog;
        };

        for release in &mut changelog.releases {
            for section in &mut release.sections {
                for commit in &mut section.commits {
                    commit.description = ISSUE_REF_REGEX
                        .replace_all(&commit.description, |caps: &regex::Captures<'_>| {
                            match caps[1].parse::<u64>() {
                                Ok(n) => format!("[#{}]({})", n, remote.issue_url(n)),
                                Err(_) => caps[0].to_string(),
                            }
                        })
                        .into_owned();
                    commit.commit_link = Some(remote.commit_url(&commit.hash));
                }
            }
        }

        changelog
    }
}
