//! Shared utilities for stamper unit tests

use crate::stamper::source::VersionSource;
use crate::stamper::types::{Query, QueryOutcome, StampConfig};
use async_trait::async_trait;
use std::path::Path;
use std::process::Command;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Scripted source returning fixed outcomes and recording the queries asked
pub struct FakeSource {
    describe: QueryOutcome,
    verify: QueryOutcome,
    calls: Arc<Mutex<Vec<Query>>>,
}

impl FakeSource {
    pub fn new(describe: QueryOutcome, verify: QueryOutcome) -> Self {
        Self {
            describe,
            verify,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn tagged(tag: &str, sha: &str) -> Self {
        Self::new(
            QueryOutcome::Value(tag.to_string()),
            QueryOutcome::Value(sha.to_string()),
        )
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<Query>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl VersionSource for FakeSource {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn query(&self, query: Query) -> QueryOutcome {
        self.calls.lock().unwrap().push(query);
        match query {
            Query::Describe => self.describe.clone(),
            Query::Verify => self.verify.clone(),
        }
    }
}

/// Base directory holding an (empty) `tree-sitter` directory
pub fn create_base_dir() -> (TempDir, StampConfig) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = StampConfig::with_base_dir(temp_dir.path());
    std::fs::create_dir_all(&config.repository).expect("Failed to create repository dir");
    (temp_dir, config)
}

pub fn git(repo_path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// Initialise a repository with one commit and no tags
pub fn init_repository(repo_path: &Path) {
    std::fs::create_dir_all(repo_path).unwrap();
    git(repo_path, &["init"]);
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "commit.gpgsign", "false"]);
    git(repo_path, &["config", "tag.gpgsign", "false"]);
    commit(repo_path, "api.h", "Initial commit");
}

pub fn commit(repo_path: &Path, file: &str, message: &str) -> String {
    std::fs::write(repo_path.join(file), message).unwrap();
    git(repo_path, &["add", "."]);
    git(repo_path, &["commit", "-m", message]);
    git(repo_path, &["rev-parse", "HEAD"])
}

/// Base directory with a `tree-sitter` repository tagged `tag` at HEAD
pub fn create_tagged_checkout(tag: &str) -> (TempDir, StampConfig, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = StampConfig::with_base_dir(temp_dir.path());
    init_repository(&config.repository);
    git(&config.repository, &["tag", tag]);
    let sha = git(&config.repository, &["rev-parse", "HEAD"]);
    (temp_dir, config, sha)
}
