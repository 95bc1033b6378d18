//! Stamper data types

use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the repository directory looked up under the base directory
pub const DEFAULT_REPOSITORY_DIR: &str = "tree-sitter";

/// Name of the generated file written under the base directory
pub const DEFAULT_OUTPUT_FILE: &str = "TreeSitter.java";

/// The two version-control queries issued per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Nearest tag reachable from HEAD, name only
    Describe,
    /// Full hash of the checked-out commit
    Verify,
}

impl Query {
    /// Arguments passed to `git -C <repo>` for this query
    pub fn git_args(self) -> &'static [&'static str] {
        match self {
            Query::Describe => &["describe", "--tags", "--abbrev=0"],
            Query::Verify => &["rev-parse", "--verify", "HEAD"],
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Describe => write!(f, "describe"),
            Query::Verify => write!(f, "verify"),
        }
    }
}

/// Classified result of one version-control query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Non-empty value, trailing whitespace stripped
    Value(String),
    /// The query succeeded but printed nothing
    Empty,
    /// The query could not be completed
    Failed { status: Option<i32>, stderr: String },
}

impl QueryOutcome {
    /// Classify captured stdout of a successful query
    pub fn from_stdout(raw: &[u8]) -> Self {
        let value = crate::core::strings::trim_output(raw);
        if value.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Value(value)
        }
    }
}

/// Which implementation answers the version-control queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Spawn the `git` executable
    #[default]
    Git,
    /// Read the repository in-process with gix
    Gix,
}

/// Version metadata obtained from the repository
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VersionInfo {
    pub tag: String,
    pub sha: String,
}

impl VersionInfo {
    pub fn new(tag: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            sha: sha.into(),
        }
    }

    /// `"{tag} ({sha})"`, as returned by the generated `getVersion()`
    pub fn version(&self) -> String {
        format!("{} ({})", self.tag, self.sha)
    }
}

/// Fully resolved settings for one stamping run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampConfig {
    pub repository: PathBuf,
    pub output: PathBuf,
    /// Custom template file; the built-in template is used when unset
    pub template: Option<PathBuf>,
    pub backend: Backend,
    /// Embed empty values instead of failing when a query yields nothing
    pub permissive: bool,
    /// Print the rendered file instead of writing it
    pub to_stdout: bool,
}

impl StampConfig {
    /// Defaults rooted at `base_dir`: `<base>/tree-sitter` and `<base>/TreeSitter.java`
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            repository: base_dir.join(DEFAULT_REPOSITORY_DIR),
            output: base_dir.join(DEFAULT_OUTPUT_FILE),
            template: None,
            backend: Backend::default(),
            permissive: false,
            to_stdout: false,
        }
    }
}
