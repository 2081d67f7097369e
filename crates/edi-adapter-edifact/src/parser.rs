//! EDIFACT ORDERS parser
//!
//! Walks segments in input order and accumulates a single [`OrderRecord`].
//! A `LIN` segment closes the item opened by the previous `LIN` (if any)
//! and opens a new one; the last open item is closed at end of input.

use edi_order::{EventSink, ItemRecord, OrderRecord};
use tracing::{debug, trace};

use crate::fields::Fields;
use crate::handlers::handler_for;
use crate::segments::split_segments;

/// Accumulator threaded through the tag handlers
#[derive(Debug, Default)]
pub struct ParseState {
    order: OrderRecord,
    current: Option<ItemRecord>,
}

impl ParseState {
    /// Start with a default order and no open item
    pub fn new() -> Self {
        Self::default()
    }

    /// Order accumulated so far (without the open item)
    pub fn order(&self) -> &OrderRecord {
        &self.order
    }

    /// Mutable order header
    pub fn order_mut(&mut self) -> &mut OrderRecord {
        &mut self.order
    }

    /// Item opened by the most recent `LIN`, if any
    pub fn current_item(&self) -> Option<&ItemRecord> {
        self.current.as_ref()
    }

    /// Mutable open item, `None` before the first `LIN`
    pub fn item_mut(&mut self) -> Option<&mut ItemRecord> {
        self.current.as_mut()
    }

    /// Flush the open item, then make `item` the open one
    pub fn open_item(&mut self, item: ItemRecord) {
        self.flush_item();
        self.current = Some(item);
    }

    /// Append the open item to the order's details.
    ///
    /// Returns `false` when no item was open.
    pub fn flush_item(&mut self) -> bool {
        match self.current.take() {
            Some(item) => {
                trace!(detail_number = %item.detail_number, "Flushing line item");
                self.order.push_item(item);
                true
            }
            None => false,
        }
    }

    /// Apply one raw segment. Returns whether its tag was recognised.
    pub fn apply(&mut self, segment: &str) -> bool {
        let fields = Fields::parse(segment);
        match handler_for(fields.tag()) {
            Some(handler) => {
                handler(self, &fields);
                true
            }
            None => {
                if !fields.is_empty() {
                    trace!(tag = fields.tag(), "Skipping unsupported segment");
                }
                false
            }
        }
    }

    /// Flush the open item and hand over the finished order
    pub fn finish(mut self) -> OrderRecord {
        self.flush_item();
        self.order
    }
}

/// Parser turning ORDERS segments into an [`OrderRecord`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderParser;

impl OrderParser {
    /// Create a new order parser
    pub fn new() -> Self {
        Self
    }

    /// Parse segments, in order, into a finished order record.
    ///
    /// Never fails: absent elements become empty strings and unknown tags
    /// are skipped.
    pub fn parse<S: AsRef<str>>(&self, segments: &[S], sink: &dyn EventSink) -> OrderRecord {
        sink.info("Parsing EDI segments...");

        let mut state = ParseState::new();
        let mut recognised = 0usize;
        for segment in segments {
            if state.apply(segment.as_ref()) {
                recognised += 1;
            }
        }
        let order = state.finish();

        debug!(
            segments = segments.len(),
            recognised,
            items = order.item_count(),
            "Parsed order"
        );
        sink.info("EDI parsing completed.");
        order
    }

    /// Tokenize raw content and parse it
    pub fn parse_str(&self, content: &str, sink: &dyn EventSink) -> OrderRecord {
        self.parse(&split_segments(content), sink)
    }
}
