//! Positional access to data elements and components
//!
//! Indexing is 0-based and the segment tag is field 0. Any index past the
//! end yields an empty string; nothing here can panic on short input.

use crate::segments::{COMPONENT_SEPARATOR, ELEMENT_SEPARATOR};

/// Padding stripped from both ends of a segment. Other whitespace, such as
/// a no-break space, is data.
const SEGMENT_PADDING: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\u{0B}'];

/// Data elements of one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Trim a raw segment and split it into data elements
    pub fn parse(segment: &'a str) -> Self {
        Self {
            parts: segment.trim_matches(SEGMENT_PADDING).split(ELEMENT_SEPARATOR).collect(),
        }
    }

    /// Segment tag (field 0)
    pub fn tag(&self) -> &'a str {
        self.field(0)
    }

    /// Data element `index`, or `""` when absent
    pub fn field(&self, index: usize) -> &'a str {
        self.parts.get(index).copied().unwrap_or_default()
    }

    /// Component `component` of data element `index`, or `""` when absent
    pub fn component(&self, index: usize, component: usize) -> &'a str {
        self.field(index)
            .split(COMPONENT_SEPARATOR)
            .nth(component)
            .unwrap_or_default()
    }

    /// Whether the segment was blank
    pub fn is_empty(&self) -> bool {
        self.tag().is_empty() && self.parts.len() == 1
    }
}
