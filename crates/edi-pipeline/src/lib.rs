#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # edi-pipeline
//!
//! Sequential batch driver: discovers EDI files in an inbox, converts each
//! one to XML in the outbox, and moves the source to the archive directory
//! on success or to the error directory on failure.
//!
//! A failure in one file never stops the rest of the batch.

pub mod archive;
pub mod batch;
pub mod inbox;
pub mod naming;

pub use archive::move_into;
pub use batch::{BatchRunner, FileFailure, FileOutcome, RunSummary};
pub use inbox::{Directories, discover_inputs, is_edi_file};
pub use naming::{NamingMode, OutputNamer};

use std::path::Path;
use thiserror::Error;

/// Errors that can occur in the pipeline
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Read error for '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Generate error for '{path}': {message}")]
    Generate { path: String, message: String },

    #[error("Write error for '{path}': {message}")]
    Write { path: String, message: String },

    #[error("Move error from '{from}' to '{to}': {message}")]
    Move {
        from: String,
        to: String,
        message: String,
    },

    #[error("Directory error for '{path}': {message}")]
    Directory { path: String, message: String },
}

impl Error {
    /// Create a read error with path context.
    pub fn read(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Read {
            path: display(path),
            message: message.into(),
        }
    }

    /// Create a generation error with path context.
    pub fn generate(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Generate {
            path: display(path),
            message: message.into(),
        }
    }

    /// Create a write error with path context.
    pub fn write(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Write {
            path: display(path),
            message: message.into(),
        }
    }

    /// Create a move error with source and target context.
    pub fn moving(
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        message: impl Into<String>,
    ) -> Self {
        Self::Move {
            from: display(from),
            to: display(to),
            message: message.into(),
        }
    }

    /// Create a directory error with path context.
    pub fn directory(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Directory {
            path: display(path),
            message: message.into(),
        }
    }
}

impl From<edi_adapter_edifact::Error> for Error {
    fn from(e: edi_adapter_edifact::Error) -> Self {
        match &e {
            edi_adapter_edifact::Error::NotFound { path } => Error::read(path, e.to_string()),
            edi_adapter_edifact::Error::Io { path, source } => {
                Error::read(path, source.to_string())
            }
        }
    }
}

fn display(path: impl AsRef<Path>) -> String {
    path.as_ref().display().to_string()
}

pub type Result<T> = std::result::Result<T, Error>;
