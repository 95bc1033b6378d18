//! CLI module containing argument parsing, configuration and validation

pub mod args;
pub mod config;
pub mod validation;

pub use args::Args;
pub use config::ConfigFile;
