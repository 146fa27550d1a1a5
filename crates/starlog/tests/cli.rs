//! End-to-end CLI scenarios against fixture repositories

use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;

use starlog::exit_codes;
use starlog::Cli;

fn cli(repo: &Path) -> Cli {
    Cli {
        repo: repo.to_path_buf(),
        title: None,
        description: None,
        output: None,
        remote: None,
        unreleased: false,
        include_other: false,
    }
}

fn init_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    Repository::init(temp.path()).unwrap();
    temp
}

fn commit_file(repo_path: &Path, file_name: &str, message: &str) {
    let repo = Repository::open(repo_path).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();

    std::fs::write(repo_path.join(file_name), "content").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(file_name)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

fn tag_head(repo_path: &Path, name: &str) {
    let repo = Repository::open(repo_path).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}

fn read_changelog(repo_path: &Path) -> String {
    std::fs::read_to_string(repo_path.join("CHANGELOG.md")).unwrap()
}

#[test]
fn test_empty_repo() {
    let temp = init_repo();

    cli(temp.path()).execute().unwrap();

    assert_eq!(read_changelog(temp.path()), "# Changelog\n");
}

#[test]
fn test_option_title() {
    let temp = init_repo();

    let mut cli = cli(temp.path());
    cli.title = Some("Title".to_string());
    cli.execute().unwrap();

    assert_eq!(read_changelog(temp.path()), "# Title\n");
}

#[test]
fn test_option_description() {
    let temp = init_repo();

    let mut cli = cli(temp.path());
    cli.description = Some("My description".to_string());
    cli.execute().unwrap();

    assert!(read_changelog(temp.path()).contains("\nMy description\n"));
}

#[test]
fn test_option_output() {
    let temp = init_repo();

    let mut cli = cli(temp.path());
    cli.output = Some(PathBuf::from("a.out"));
    cli.execute().unwrap();

    let content = std::fs::read_to_string(temp.path().join("a.out")).unwrap();
    assert_eq!(content, "# Changelog\n");
}

#[test]
fn test_option_remote() {
    let temp = init_repo();
    commit_file(temp.path(), "file", "feat: Add file #1");

    let repo = Repository::open(temp.path()).unwrap();
    repo.remote("upstream", "git@github.com:owner/repo.git")
        .unwrap();

    let mut cli = cli(temp.path());
    cli.remote = Some("upstream".to_string());
    cli.unreleased = true;
    cli.execute().unwrap();

    let content = read_changelog(temp.path());
    assert!(content.contains("[#1](https://github.com/owner/repo/issues/1)"));
}

#[test]
fn test_missing_remote_leaves_references_unlinked() {
    let temp = init_repo();
    commit_file(temp.path(), "file", "feat: Add file #1");

    let mut cli = cli(temp.path());
    cli.unreleased = true;
    cli.execute().unwrap();

    let content = read_changelog(temp.path());
    assert!(content.contains("Add file #1"));
    assert!(!content.contains("issues/1"));
}

#[test]
fn test_unreleased_hidden_by_default() {
    let temp = init_repo();
    commit_file(temp.path(), "file", "feat: Add file");

    cli(temp.path()).execute().unwrap();

    assert_eq!(read_changelog(temp.path()), "# Changelog\n");
}

#[test]
fn test_tagged_release() {
    let temp = init_repo();
    commit_file(temp.path(), "file", "feat: Add file");
    tag_head(temp.path(), "v1.0.0");
    commit_file(temp.path(), "other", "fix: Repair file");
    tag_head(temp.path(), "v1.0.1");

    cli(temp.path()).execute().unwrap();

    let content = read_changelog(temp.path());
    assert!(content.contains("## v1.0.1"));
    assert!(content.contains("### Bug Fixes"));
    assert!(content.contains("- Repair file"));
    assert!(content.contains("## v1.0.0"));
    assert!(content.contains("### Features"));
    assert!(content.contains("- Add file"));
    // Newest release first
    let v101 = content.find("## v1.0.1").unwrap();
    let v100 = content.find("## v1.0.0").unwrap();
    assert!(v101 < v100);
}

#[test]
fn test_config_file_defaults_and_flag_override() {
    let temp = init_repo();
    std::fs::write(
        temp.path().join(".starlog.toml"),
        "title = \"From Config\"\n",
    )
    .unwrap();

    cli(temp.path()).execute().unwrap();
    assert_eq!(read_changelog(temp.path()), "# From Config\n");

    let mut cli = cli(temp.path());
    cli.title = Some("From Flag".to_string());
    cli.execute().unwrap();
    assert_eq!(read_changelog(temp.path()), "# From Flag\n");
}

#[test]
fn test_not_a_repository() {
    let temp = TempDir::new().unwrap();

    let result = cli(temp.path()).execute();
    let error = result.unwrap_err();
    assert_eq!(exit_codes::for_error(&error), exit_codes::GIT_ERROR);
}
