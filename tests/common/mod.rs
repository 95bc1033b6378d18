//! Common test utilities and helpers
//!
//! Builds throwaway `tree-sitter` checkouts with the git CLI.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

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

pub fn commit(repo_path: &Path, file: &str, message: &str) -> String {
    std::fs::write(repo_path.join(file), message).unwrap();
    git(repo_path, &["add", "."]);
    git(repo_path, &["commit", "-m", message]);
    git(repo_path, &["rev-parse", "HEAD"])
}

/// A base directory containing a `tree-sitter` git checkout
pub struct Checkout {
    pub temp_dir: TempDir,
    pub repository: PathBuf,
    pub sha: String,
}

impl Checkout {
    /// Repository with a single commit and no tags
    pub fn untagged() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repository = temp_dir.path().join("tree-sitter");
        std::fs::create_dir_all(&repository).unwrap();

        git(&repository, &["init"]);
        git(&repository, &["config", "user.name", "Test User"]);
        git(&repository, &["config", "user.email", "test@example.com"]);
        git(&repository, &["config", "commit.gpgsign", "false"]);
        git(&repository, &["config", "tag.gpgsign", "false"]);
        let sha = commit(&repository, "api.h", "Initial commit");

        Self {
            temp_dir,
            repository,
            sha,
        }
    }

    /// Repository whose HEAD carries the lightweight tag `tag`
    pub fn tagged(tag: &str) -> Self {
        let checkout = Self::untagged();
        git(&checkout.repository, &["tag", tag]);
        checkout
    }

    pub fn base_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn default_output(&self) -> PathBuf {
        self.base_dir().join("TreeSitter.java")
    }
}

/// Run the built binary from `cwd`
pub fn run_treestamp(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_treestamp"))
        .args(["--no-color"])
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to run treestamp")
}
