//! Segment tokenizer and EDIFACT delimiters
//!
//! Only the default service characters are recognised; a UNA service
//! string advice is treated like any other (unknown) segment.

use std::path::Path;

use edi_order::EventSink;
use tracing::debug;

use crate::{Error, Result};

/// Segment terminator
pub const SEGMENT_TERMINATOR: char = '\'';
/// Data element separator
pub const ELEMENT_SEPARATOR: char = '+';
/// Component data element separator
pub const COMPONENT_SEPARATOR: char = ':';

/// Split raw content into segments on the segment terminator.
///
/// Segments are returned untouched: surrounding whitespace, line breaks
/// and the empty tail after a final terminator are all kept.
pub fn split_segments(content: &str) -> Vec<&str> {
    content.split(SEGMENT_TERMINATOR).collect()
}

/// Read a file and split it into owned segments.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_segments(path: &Path, sink: &dyn EventSink) -> Result<Vec<String>> {
    let name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
    sink.info(&format!("Reading EDI file: {name}"));

    if !path.exists() {
        sink.error(&format!("File not found: {}", path.display()));
        return Err(Error::not_found(path));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::not_found(path)
        } else {
            Error::io(path, e)
        }
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let segments: Vec<String> = split_segments(&content)
        .into_iter()
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), bytes = bytes.len(), segments = segments.len(), "Read EDI segments");

    Ok(segments)
}
