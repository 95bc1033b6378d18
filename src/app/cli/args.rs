//! Core CLI arguments structure and basic functionality
//!
//! This module contains the Args struct definition and its resolution into a
//! [`StampConfig`]. Validation and configuration loading live in separate modules.

use crate::stamper::types::{Backend, StampConfig};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Command-line options
///
/// Every option except the verbosity counters can also come from the
/// configuration file; values given here take precedence.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "treestamp")]
#[command(about = "Generate the tree-sitter version class from a git checkout")]
#[command(version, long_version = crate::core::version::long_version())]
pub struct Args {
    /// Output file path [default: <BASE>/TreeSitter.java]
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Repository to query [default: <BASE>/tree-sitter]
    #[arg(short = 'r', long = "repo", value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Directory the default repository and output paths are relative to [default: current directory]
    #[arg(short = 'b', long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Tera template to render instead of the built-in one
    #[arg(short = 't', long = "template", value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Backend used to query the repository
    #[arg(long = "backend", value_enum, value_name = "BACKEND")]
    pub backend: Option<Backend>,

    /// Embed empty values instead of failing when no tag or commit is found
    #[arg(long = "permissive", action = ArgAction::SetTrue)]
    pub permissive: bool,

    /// Print the generated file instead of writing it
    #[arg(long = "stdout", action = ArgAction::SetTrue, conflicts_with = "output")]
    pub stdout: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Do not load the default configuration file
    #[arg(long = "no-config", action = ArgAction::SetTrue, conflicts_with = "config_file")]
    pub no_config: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(short = 'g', long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Verbose output (can be used multiple times)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet output (can be used multiple times)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Color setting from the configuration file, consulted when no flag is given
    #[arg(skip)]
    pub config_color: Option<bool>,
}

impl Args {
    /// Verbosity shift: positive for `-v`, negative for `-q`
    pub fn verbosity(&self) -> i8 {
        (self.verbose.min(8) as i8) - (self.quiet.min(8) as i8)
    }

    /// Color choice: `Some` when forced by a flag or the config file, `None` for auto
    pub fn color_override(&self) -> Option<bool> {
        if self.no_color {
            Some(false)
        } else if self.color {
            Some(true)
        } else {
            self.config_color
        }
    }

    /// Log file, with the magic values `none` and `-` disabling file logging
    pub fn effective_log_file(&self) -> Option<&Path> {
        self.log_file.as_deref().filter(|p| {
            let s = p.to_string_lossy();
            !(s.eq_ignore_ascii_case("none") || s == "-")
        })
    }

    /// Resolve the stamping configuration against the current directory
    ///
    /// A relative `--base-dir` is taken relative to `cwd`; explicit
    /// `--repo`/`--output` values are used as given.
    pub fn stamp_config(&self, cwd: &Path) -> StampConfig {
        let base_dir = match &self.base_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };

        let mut config = StampConfig::with_base_dir(&base_dir);
        if let Some(repository) = &self.repository {
            config.repository = repository.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        config.template = self.template.clone();
        config.backend = self.backend.unwrap_or_default();
        config.permissive = self.permissive;
        config.to_stdout = self.stdout;
        config
    }
}
