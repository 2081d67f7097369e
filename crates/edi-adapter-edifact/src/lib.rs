//! # edi-adapter-edifact
//!
//! EDIFACT ORDERS tokenizer and order parser.
//!
//! Missing elements degrade to empty strings and unknown segments are
//! skipped. Only an unreadable input file is an error.
//!
//! ```rust
//! use edi_adapter_edifact::OrderParser;
//! use edi_order::NullSink;
//!
//! let order = OrderParser::new().parse_str("BGM+220+PO123'LIN+1++EAN123:EN'", &NullSink);
//! assert_eq!(order.order_number, "PO123");
//! assert_eq!(order.order_details.len(), 1);
//! ```

pub mod fields;
pub mod handlers;
pub mod parser;
pub mod segments;

pub use fields::Fields;
pub use parser::{OrderParser, ParseState};
pub use segments::{read_segments, split_segments};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading EDIFACT input
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Build a not-found error for an input path.
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Build an I/O error with path context.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
