//! Tag operations

use chrono::{TimeZone, Utc};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// Get all tags with the commit each one points to
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();

            if let Ok(tag) = self.repo.find_tag(oid) {
                // Annotated tag: resolve to the tagged commit
                let target_id = tag.target_id();
                let mut tag_info = TagInfo::new(&name, target_id.to_string());

                if let Some(msg) = tag.message() {
                    tag_info = tag_info.with_message(msg);
                }

                if let Some(tagger) = tag.tagger() {
                    if let Some(name) = tagger.name() {
                        tag_info = tag_info.with_tagger(name);
                    }
                    let timestamp = Utc
                        .timestamp_opt(tagger.when().seconds(), 0)
                        .single()
                        .unwrap_or_else(Utc::now);
                    tag_info = tag_info.with_timestamp(timestamp);
                }

                tags.push(tag_info);
            } else if let Ok(commit) = self.repo.find_commit(oid) {
                // Lightweight tag points straight at a commit
                tags.push(TagInfo::new(&name, commit.id().to_string()));
            }

            true
        })?;

        debug!(count = tags.len(), "listed all tags");
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use std::path::Path;
    use tempfile::TempDir;

    fn setup_repo_with_tag() -> (TempDir, GitRepo) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();

        std::fs::write(temp.path().join("file.txt"), "content").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("file.txt")).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();

        let commit = repo.find_commit(oid).unwrap();
        repo.tag_lightweight("v1.0.0", commit.as_object(), false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo)
    }

    #[test]
    fn test_list_tags() {
        let (_temp, repo) = setup_repo_with_tag();
        let tags = repo.tags().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "v1.0.0");
        // Lightweight tags carry no date
        assert!(tags[0].timestamp.is_none());
    }

    #[test]
    fn test_annotated_tag_metadata() {
        let (temp, _repo) = setup_repo_with_tag();
        let repo = Repository::open(temp.path()).unwrap();

        let sig = Signature::now("Tagger", "tagger@example.com").unwrap();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.tag("v1.1.0", head.as_object(), &sig, "Release 1.1.0", false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        let tags = git_repo.tags().unwrap();
        let annotated = tags.iter().find(|t| t.name == "v1.1.0").unwrap();

        assert_eq!(annotated.message.as_deref(), Some("Release 1.1.0"));
        assert_eq!(annotated.tagger.as_deref(), Some("Tagger"));
        assert!(annotated.timestamp.is_some());
        assert_eq!(annotated.commit_hash, head.id().to_string());
    }

    #[test]
    fn test_no_tags() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();
        assert!(repo.tags().unwrap().is_empty());
    }
}
