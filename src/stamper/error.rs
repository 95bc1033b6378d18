//! Stamper Error Types

use std::path::PathBuf;

/// Errors raised while querying version metadata or writing the stamped file
#[derive(Debug, thiserror::Error)]
pub enum StampError {
    /// Repository directory missing or unusable
    #[error("Repository error at '{}': {message}", .path.display())]
    Repository { path: PathBuf, message: String },

    /// A version-control query could not be completed
    #[error("Query '{query}' failed ({backend} backend): {message}")]
    QueryFailed {
        query: String,
        backend: &'static str,
        message: String,
    },

    /// The query succeeded but printed nothing
    #[error("Query '{query}' produced no output")]
    EmptyOutput { query: String },

    /// No tag is reachable from the checked-out commit
    #[error("No tag found in repository '{}'", .path.display())]
    NoTag { path: PathBuf },

    /// Template could not be loaded or rendered
    #[error("Template error: {message}")]
    Template { message: String },

    /// IO operation failed
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StampError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StampError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<tera::Error> for StampError {
    fn from(e: tera::Error) -> Self {
        // tera nests the useful part of the message in its source chain
        let mut message = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = std::error::Error::source(inner);
        }
        StampError::Template { message }
    }
}

impl crate::core::error_handling::ContextualError for StampError {
    fn is_user_actionable(&self) -> bool {
        match self {
            StampError::Repository { .. } => true,
            StampError::NoTag { .. } => true,
            StampError::Template { .. } => true,
            StampError::QueryFailed { .. } => false,
            StampError::EmptyOutput { .. } => false,
            StampError::Io { .. } => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            StampError::Repository { message, .. } => Some(message),
            StampError::NoTag { .. } => Some("No tag found: the repository has no tag reachable from HEAD"),
            StampError::Template { message } => Some(message),
            _ => None,
        }
    }
}

pub type StampResult<T> = Result<T, StampError>;
