//! `git` subprocess backend

use super::VersionSource;
use crate::core::strings::trim_output;
use crate::stamper::types::{Query, QueryOutcome};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Runs `git -C <repository> ...` for each query
#[derive(Debug, Clone)]
pub struct GitCommand {
    repository: PathBuf,
    program: OsString,
}

impl GitCommand {
    pub fn new(repository: &Path) -> Self {
        Self {
            repository: repository.to_path_buf(),
            program: OsString::from("git"),
        }
    }

    /// Directory git must not search above
    ///
    /// The repository has to be a checkout on its own. Without a ceiling an
    /// uninitialised submodule would resolve to the enclosing project.
    fn ceiling(&self) -> Option<PathBuf> {
        let repository =
            std::fs::canonicalize(&self.repository).unwrap_or_else(|_| self.repository.clone());
        repository
            .parent()
            .filter(|p| p.is_absolute())
            .map(Path::to_path_buf)
    }

    /// Use a different executable in place of `git`
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }
}

#[async_trait]
impl VersionSource for GitCommand {
    fn name(&self) -> &'static str {
        "git"
    }

    async fn query(&self, query: Query) -> QueryOutcome {
        log::trace!(
            "Running {:?} -C {} {}",
            self.program,
            self.repository.display(),
            query.git_args().join(" ")
        );

        let mut command = tokio::process::Command::new(&self.program);
        command
            .arg("-C")
            .arg(&self.repository)
            .args(query.git_args())
            .stdin(Stdio::null());
        if let Some(ceiling) = self.ceiling() {
            command.env("GIT_CEILING_DIRECTORIES", ceiling);
        }
        let output = command.output().await;

        match output {
            Ok(output) if output.status.success() => QueryOutcome::from_stdout(&output.stdout),
            Ok(output) => QueryOutcome::Failed {
                status: output.status.code(),
                stderr: trim_output(&output.stderr),
            },
            Err(e) => QueryOutcome::Failed {
                status: None,
                stderr: format!("failed to run {:?}: {}", self.program, e),
            },
        }
    }
}
