#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # edi-order
//!
//! Purchase order record model shared by the EDIFACT parser, the XML
//! generator and the batch pipeline.
//!
//! An [`OrderRecord`] is created fresh for every input file, filled in
//! segment by segment, and handed once to the generator. Line items live
//! in [`OrderRecord::order_details`] in the order their `LIN` segments
//! appear.

/// Event sink capability injected into parser, generator and pipeline.
pub mod events;
/// Line item records.
pub mod item;
/// Order header and party blocks.
pub mod order;

pub use events::{EventSink, Level, NullSink, RecordingSink, TracingSink};
pub use item::ItemRecord;
pub use order::{
    DEFAULT_DOCUMENT_REFERENCE_NUMBER, DEFAULT_DOCUMENT_TIME, DEFAULT_ORDER_TYPE, OrderRecord,
    Party, PartyRole,
};
