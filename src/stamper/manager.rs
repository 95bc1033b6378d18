//! Stamper
//!
//! Queries the repository for its nearest tag and current commit, renders the
//! template and writes the result. The output file is written once, after
//! every query and the render have succeeded, so a failed run leaves any
//! existing file untouched.

use crate::stamper::error::{StampError, StampResult};
use crate::stamper::source::{self, VersionSource};
use crate::stamper::template::StampTemplate;
use crate::stamper::types::{Query, QueryOutcome, StampConfig, VersionInfo};
use std::path::PathBuf;

/// git's wording when `describe` finds no tag at all
const NO_TAG_MARKERS: [&str; 2] = ["No names found", "No tags can describe"];

/// Result of a successful stamping run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    pub info: VersionInfo,
    pub content: String,
    /// Path written, `None` when the content went to stdout
    pub written: Option<PathBuf>,
}

pub struct Stamper {
    config: StampConfig,
    source: Box<dyn VersionSource>,
}

impl Stamper {
    /// Create a stamper using the backend named in `config`
    pub fn new(config: StampConfig) -> Self {
        let source = source::for_backend(config.backend, &config.repository);
        Self { config, source }
    }

    /// Create a stamper with an explicit query source
    pub fn with_source(config: StampConfig, source: Box<dyn VersionSource>) -> Self {
        Self { config, source }
    }

    fn check_repository(&self) -> StampResult<()> {
        let path = &self.config.repository;
        if !path.exists() {
            return Err(StampError::Repository {
                path: path.clone(),
                message: format!("Repository directory does not exist: '{}'", path.display()),
            });
        }
        if !path.is_dir() {
            return Err(StampError::Repository {
                path: path.clone(),
                message: format!("Repository path is not a directory: '{}'", path.display()),
            });
        }
        Ok(())
    }

    /// Turn a query outcome into a value, applying the permissive policy
    fn accept(&self, query: Query, outcome: QueryOutcome) -> StampResult<String> {
        let outcome = match outcome {
            QueryOutcome::Value(value) => return Ok(value),
            other if self.config.permissive => {
                log::warn!(
                    "{} yielded no value ({:?}); embedding an empty string",
                    query,
                    other
                );
                return Ok(String::new());
            }
            other => other,
        };

        match (query, outcome) {
            (Query::Describe, QueryOutcome::Empty) => Err(StampError::NoTag {
                path: self.config.repository.clone(),
            }),
            (Query::Describe, QueryOutcome::Failed { ref stderr, .. })
                if NO_TAG_MARKERS.iter().any(|m| stderr.contains(m)) =>
            {
                Err(StampError::NoTag {
                    path: self.config.repository.clone(),
                })
            }
            (_, QueryOutcome::Failed { status, stderr }) => Err(StampError::QueryFailed {
                query: query.to_string(),
                backend: self.source.name(),
                message: match status {
                    Some(code) => format!("exit status {}: {}", code, stderr),
                    None => stderr,
                },
            }),
            (_, _) => Err(StampError::EmptyOutput {
                query: query.to_string(),
            }),
        }
    }

    /// Query tag and commit SHA, in that order
    pub async fn resolve_version(&self) -> StampResult<VersionInfo> {
        self.check_repository()?;
        log::debug!(
            "Querying {} with the {} backend",
            self.config.repository.display(),
            self.source.name()
        );

        let tag = self
            .accept(Query::Describe, self.source.query(Query::Describe).await)?;
        let sha = self
            .accept(Query::Verify, self.source.query(Query::Verify).await)?;

        log::debug!("Resolved tag '{}' at commit {}", tag, sha);
        Ok(VersionInfo { tag, sha })
    }

    /// Resolve the version and render the template without writing anything
    pub async fn render(&self) -> StampResult<(VersionInfo, String)> {
        let template = StampTemplate::load(self.config.template.as_deref())?;
        let info = self.resolve_version().await?;
        let content = template.render(&info)?;
        Ok((info, content))
    }

    /// Full run: resolve, render, then overwrite the output file
    ///
    /// With `to_stdout` set nothing is written; the caller prints `content`.
    pub async fn run(&self) -> StampResult<StampReport> {
        let (info, content) = self.render().await?;

        if self.config.to_stdout {
            return Ok(StampReport {
                info,
                content,
                written: None,
            });
        }

        let output = &self.config.output;
        tokio::fs::write(output, content.as_bytes())
            .await
            .map_err(|e| StampError::io(output, e))?;
        log::info!("Wrote {} ({})", output.display(), info.version());

        Ok(StampReport {
            info,
            content,
            written: Some(output.clone()),
        })
    }
}
