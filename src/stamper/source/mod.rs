//! Version-control query backends
//!
//! A [`VersionSource`] answers the two queries a stamping run needs. The
//! default backend spawns `git`; the gix backend reads the repository
//! in-process. Tests substitute their own implementations.

pub mod command;
pub mod gix_repository;

pub use command::GitCommand;
pub use gix_repository::GixRepository;

use crate::stamper::types::{Backend, Query, QueryOutcome};
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Short backend name used in log messages
    fn name(&self) -> &'static str;

    /// Run one query against the repository
    async fn query(&self, query: Query) -> QueryOutcome;
}

/// Build the source for the configured backend
pub fn for_backend(backend: Backend, repository: &Path) -> Box<dyn VersionSource> {
    match backend {
        Backend::Git => Box::new(GitCommand::new(repository)),
        Backend::Gix => Box::new(GixRepository::new(repository)),
    }
}
