//! TOML configuration file parsing and loading
//!
//! This module handles loading and parsing of TOML configuration files,
//! including default config file discovery and merging into [`Args`].

use crate::core::strings::title_case;
use crate::core::validation::ValidationError;
use crate::stamper::types::Backend;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::args::Args;

/// Settings accepted in the configuration file
///
/// Keys use the same names as the long CLI options. Relative paths are
/// resolved against the directory containing the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    pub output: Option<PathBuf>,
    pub repository: Option<PathBuf>,
    pub base_dir: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub backend: Option<Backend>,
    pub permissive: Option<bool>,
    pub color: Option<bool>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<String>,
}

impl ConfigFile {
    /// Parse configuration text; `config_dir` anchors relative paths
    pub fn parse(contents: &str, config_dir: &Path) -> Result<Self, ValidationError> {
        let mut config: ConfigFile = toml::from_str(contents)
            .map_err(|e| ValidationError::new(&format!("Invalid configuration: {}", e)))?;
        config.validate()?;

        for path in [
            &mut config.output,
            &mut config.repository,
            &mut config.base_dir,
            &mut config.template,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = config_dir.join(&*path);
            }
        }

        Ok(config)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(level) = &self.log_level {
            const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
            if !LEVELS.contains(&level.as_str()) {
                return Err(ValidationError::new(&format!(
                    "Invalid log-level '{}' (expected one of: {})",
                    level,
                    LEVELS.join(", ")
                )));
            }
        }
        if let Some(format) = &self.log_format {
            const FORMATS: [&str; 3] = ["text", "ext", "json"];
            if !FORMATS.contains(&format.as_str()) {
                return Err(ValidationError::new(&format!(
                    "Invalid log-format '{}' (expected one of: {})",
                    format,
                    FORMATS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Default configuration file location: `<config_dir>/Treestamp/treestamp.toml`
pub fn default_config_path(command_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| {
        d.join(title_case(command_name))
            .join(format!("{}.toml", command_name))
    })
}

impl Args {
    /// Locate and load the configuration file
    ///
    /// An explicitly named file must exist. The default file is optional and
    /// skipped entirely with `--no-config`.
    pub async fn load_config_file(&self) -> Result<Option<ConfigFile>, ValidationError> {
        let config_path = match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ValidationError::new(&format!(
                        "The specified configuration file does not exist: {}",
                        path.display()
                    )));
                }
                path.clone()
            }
            None if self.no_config => return Ok(None),
            None => match default_config_path("treestamp") {
                Some(path) if path.exists() => path,
                _ => return Ok(None),
            },
        };

        log::debug!("Loading configuration from {}", config_path.display());
        let contents = tokio::fs::read_to_string(&config_path).await.map_err(|e| {
            ValidationError::new(&format!(
                "Error reading configuration file {}: {}",
                config_path.display(),
                e
            ))
        })?;
        let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

        ConfigFile::parse(&contents, config_dir)
            .map(Some)
            .map_err(|e| {
                ValidationError::new(&format!(
                    "Error in configuration file {}: {}",
                    config_path.display(),
                    e
                ))
            })
    }

    /// Fill options not given on the command line from the configuration file
    pub fn apply_config(&mut self, config: &ConfigFile) {
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        if self.repository.is_none() {
            self.repository = config.repository.clone();
        }
        if self.base_dir.is_none() {
            self.base_dir = config.base_dir.clone();
        }
        if self.template.is_none() {
            self.template = config.template.clone();
        }
        if self.backend.is_none() {
            self.backend = config.backend;
        }
        if !self.permissive {
            self.permissive = config.permissive.unwrap_or(false);
        }
        if self.config_color.is_none() {
            self.config_color = config.color;
        }
        if self.log_level.is_none() {
            self.log_level = config.log_level.clone();
        }
        if self.log_format.is_none() {
            self.log_format = config.log_format.clone();
        }
        if self.log_file.is_none() {
            self.log_file = config.log_file.as_ref().map(PathBuf::from);
        }
    }
}
