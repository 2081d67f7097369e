//! Tracing subscriber setup

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Where console log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Stdout,
    /// Used when stdout carries command output
    Stderr,
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {message}")]
    Filter { level: String, message: String },

    #[error("Cannot open log file '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialised: {0}")]
    Init(String),
}

/// Build the level filter from a directive such as `info` or `edi2xml=debug`
pub fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|e| LoggingError::Filter {
        level: level.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// Every line goes to the console and, when `log_file` is set, is also
/// appended to that file without ANSI colours.
pub fn init(level: &str, log_file: Option<&Path>, console: Console) -> Result<(), LoggingError> {
    let filter = filter(level)?;

    let console_writer = match console {
        Console::Stdout => BoxMakeWriter::new(std::io::stdout),
        Console::Stderr => BoxMakeWriter::new(std::io::stderr),
    };
    let console_layer = fmt::layer().with_target(false).with_writer(console_writer);

    let file_layer = match log_file {
        Some(path) => {
            let file = open_append(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}

fn open_append(path: &Path) -> Result<fs::File, LoggingError> {
    let to_error = |source| LoggingError::File {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}
