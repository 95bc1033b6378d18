//! Version Stamper
//!
//! Reads the nearest tag and the current commit hash of a `tree-sitter`
//! checkout and renders them into the `TreeSitter.java` version class.
//!
//! - **Stamper**: runs the queries, applies the empty-value policy, writes once
//! - **VersionSource**: `git` subprocess or in-process gix backend
//! - **StampTemplate**: Tera rendering of the built-in or a custom template

pub mod api;
pub mod error;
pub mod manager;
pub mod source;
pub mod template;
pub mod types;

pub use error::{StampError, StampResult};
pub use manager::{StampReport, Stamper};
pub use types::{Backend, StampConfig, VersionInfo};
