//! Application configuration
//!
//! Values come from three layers: command-line flags (or their environment
//! variables), an optional YAML file, and built-in defaults. The first
//! layer that sets a value wins.

use std::fs;
use std::path::{Path, PathBuf};

use edi_pipeline::Directories;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_INBOX: &str = "./inbox";
pub const DEFAULT_OUTBOX: &str = "./outbox";
pub const DEFAULT_ARCHIVE: &str = "./archive";
pub const DEFAULT_ERROR: &str = "./error";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Contents of a YAML config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub inbox_dir: Option<PathBuf>,
    pub outbox_dir: Option<PathBuf>,
    pub archive_dir: Option<PathBuf>,
    pub error_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse YAML text. An empty document yields an empty config.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Read and parse a YAML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|message| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        })
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub inbox_dir: Option<PathBuf>,
    pub outbox_dir: Option<PathBuf>,
    pub archive_dir: Option<PathBuf>,
    pub error_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub inbox_dir: PathBuf,
    pub outbox_dir: PathBuf,
    pub archive_dir: PathBuf,
    pub error_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inbox_dir: PathBuf::from(DEFAULT_INBOX),
            outbox_dir: PathBuf::from(DEFAULT_OUTBOX),
            archive_dir: PathBuf::from(DEFAULT_ARCHIVE),
            error_dir: PathBuf::from(DEFAULT_ERROR),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve configuration from an optional file plus overrides
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let config = Self::merge(file, overrides);
        config.check()?;
        Ok(config)
    }

    /// Layer overrides over file values over defaults
    pub fn merge(file: FileConfig, overrides: Overrides) -> Self {
        let defaults = Self::default();
        Self {
            inbox_dir: overrides
                .inbox_dir
                .or(file.inbox_dir)
                .unwrap_or(defaults.inbox_dir),
            outbox_dir: overrides
                .outbox_dir
                .or(file.outbox_dir)
                .unwrap_or(defaults.outbox_dir),
            archive_dir: overrides
                .archive_dir
                .or(file.archive_dir)
                .unwrap_or(defaults.archive_dir),
            error_dir: overrides
                .error_dir
                .or(file.error_dir)
                .unwrap_or(defaults.error_dir),
            log_file: overrides.log_file.or(file.log_file),
            log_level: overrides
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        let dirs = [
            ("inbox_dir", &self.inbox_dir),
            ("outbox_dir", &self.outbox_dir),
            ("archive_dir", &self.archive_dir),
            ("error_dir", &self.error_dir),
        ];
        for (key, dir) in dirs {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        Ok(())
    }

    /// Working directories for a batch run
    pub fn directories(&self) -> Directories {
        Directories::new(
            &self.inbox_dir,
            &self.outbox_dir,
            &self.archive_dir,
            &self.error_dir,
        )
    }
}
