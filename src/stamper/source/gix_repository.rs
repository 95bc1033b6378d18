//! In-process backend built on gix

use super::VersionSource;
use crate::stamper::types::{Query, QueryOutcome};
use async_trait::async_trait;
use gix::commit::describe::SelectRef;
use std::path::{Path, PathBuf};

/// Answers queries by opening the repository with gix
#[derive(Debug, Clone)]
pub struct GixRepository {
    repository: PathBuf,
}

impl GixRepository {
    pub fn new(repository: &Path) -> Self {
        Self {
            repository: repository.to_path_buf(),
        }
    }
}

/// Nearest tag reachable from HEAD, lightweight tags included
fn describe(repo: &gix::Repository) -> Result<Option<String>, String> {
    let commit = repo
        .head_commit()
        .map_err(|e| format!("Failed to get HEAD commit: {}", e))?;
    let resolution = commit
        .describe()
        .names(SelectRef::AllTags)
        .try_resolve()
        .map_err(|e| format!("Failed to describe HEAD: {}", e))?;
    Ok(resolution.and_then(|r| r.outcome.name.map(|name| name.to_string())))
}

fn verify_head(repo: &gix::Repository) -> Result<Option<String>, String> {
    let id = repo
        .rev_parse_single("HEAD")
        .map_err(|e| format!("Failed to resolve HEAD: {}", e))?;
    Ok(Some(id.to_string()))
}

fn run_query(repository: &Path, query: Query) -> QueryOutcome {
    let result = gix::open(repository)
        .map_err(|e| format!("Failed to open repository: {}", e))
        .and_then(|repo| match query {
            Query::Describe => describe(&repo),
            Query::Verify => verify_head(&repo),
        });

    match result {
        Ok(Some(value)) => QueryOutcome::from_stdout(value.as_bytes()),
        Ok(None) => QueryOutcome::Empty,
        Err(message) => QueryOutcome::Failed {
            status: None,
            stderr: message,
        },
    }
}

#[async_trait]
impl VersionSource for GixRepository {
    fn name(&self) -> &'static str {
        "gix"
    }

    async fn query(&self, query: Query) -> QueryOutcome {
        let repository = self.repository.clone();
        tokio::task::spawn_blocking(move || run_query(&repository, query))
            .await
            .unwrap_or_else(|e| QueryOutcome::Failed {
                status: None,
                stderr: format!("Failed to execute git operation: {}", e),
            })
    }
}
