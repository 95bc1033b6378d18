//! Stamper API
//!
//! Public interface of the stamper, consolidating its external exports.

pub use crate::stamper::error::{StampError, StampResult};
pub use crate::stamper::manager::{StampReport, Stamper};
pub use crate::stamper::source::{GitCommand, GixRepository, VersionSource};
pub use crate::stamper::template::{StampTemplate, BUILTIN_TEMPLATE};
pub use crate::stamper::types::{
    Backend, Query, QueryOutcome, StampConfig, VersionInfo, DEFAULT_OUTPUT_FILE,
    DEFAULT_REPOSITORY_DIR,
};
