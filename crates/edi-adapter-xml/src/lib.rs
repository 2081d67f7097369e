//! # edi-adapter-xml
//!
//! Serializes a parsed [`edi_order::OrderRecord`] into the `OrderRequest`
//! XML document consumed downstream.
//!
//! Every header and detail element is always present, in a fixed order;
//! empty values become empty elements. Only elements are used, never
//! attributes.
//!
//! ```rust
//! use edi_adapter_xml::XmlGenerator;
//! use edi_order::{NullSink, OrderRecord};
//!
//! let xml = XmlGenerator::new().generate(&OrderRecord::default(), &NullSink).unwrap();
//! assert!(xml.contains("<Snrf>173831239</Snrf>"));
//! assert!(xml.contains("<OrderDetails/>"));
//! ```

pub mod elements;
pub mod generator;

pub use elements::{DETAIL_ELEMENTS, HEADER_ELEMENTS, detail_fields, header_fields};
pub use generator::XmlGenerator;

use thiserror::Error;

/// Errors that can occur when generating XML
#[derive(Error, Debug)]
pub enum Error {
    #[error("XML write error: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, Error>;
