//! OrderRequest XML generator

use std::borrow::Cow;

use edi_order::{EventSink, OrderRecord};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::elements::{detail_fields, header_fields};
use crate::{Error, Result};

const ROOT: &str = "OrderRequest";
const HEADER: &str = "OrderHeader";
const DETAILS: &str = "OrderDetails";
const DETAIL: &str = "Detail";

/// Generator for `OrderRequest` documents
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlGenerator {
    pretty: bool,
}

impl XmlGenerator {
    /// Create a generator producing compact output
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent nested elements by two spaces
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serialize an order.
    ///
    /// The output starts with an XML declaration and ends with a newline.
    pub fn generate(&self, order: &OrderRecord, sink: &dyn EventSink) -> Result<String> {
        sink.info("Generating XML...");

        let mut writer = if self.pretty {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };

        write(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
        if !self.pretty {
            writer.get_mut().push(b'\n');
        }

        write(&mut writer, Event::Start(BytesStart::new(ROOT)))?;

        write(&mut writer, Event::Start(BytesStart::new(HEADER)))?;
        for (name, value) in header_fields(order) {
            write_field(&mut writer, name, value)?;
        }
        write(&mut writer, Event::End(BytesEnd::new(HEADER)))?;

        if order.order_details.is_empty() {
            write(&mut writer, Event::Empty(BytesStart::new(DETAILS)))?;
        } else {
            write(&mut writer, Event::Start(BytesStart::new(DETAILS)))?;
            for item in &order.order_details {
                write(&mut writer, Event::Start(BytesStart::new(DETAIL)))?;
                for (name, value) in detail_fields(item) {
                    write_field(&mut writer, name, value)?;
                }
                write(&mut writer, Event::End(BytesEnd::new(DETAIL)))?;
            }
            write(&mut writer, Event::End(BytesEnd::new(DETAILS)))?;
        }

        write(&mut writer, Event::End(BytesEnd::new(ROOT)))?;

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        let xml = String::from_utf8(bytes).map_err(|e| Error::Xml(e.to_string()))?;

        debug!(
            items = order.item_count(),
            bytes = xml.len(),
            "Generated OrderRequest XML"
        );
        sink.info("XML generation completed.");
        Ok(xml)
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}

/// Empty values become `<Name/>`; anything else is escaped text content.
fn write_field(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<()> {
    let value = xml_text(value);
    if value.is_empty() {
        return write(writer, Event::Empty(BytesStart::new(name)));
    }
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(&value)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

/// Drop characters outside the XML 1.0 `Char` production
fn xml_text(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use edi_order::{ItemRecord, NullSink, RecordingSink};

    fn generate(order: &OrderRecord) -> String {
        XmlGenerator::new().generate(order, &NullSink).unwrap()
    }

    #[test]
    fn test_default_order_document() {
        let xml = generate(&OrderRecord::default());

        assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<OrderRequest><OrderHeader>"));
        assert!(xml.contains("<Snrf>173831239</Snrf><DocumentDate/><DocumentTime>1625</DocumentTime>"));
        assert!(xml.contains("<OrderType>Original order</OrderType>"));
        assert!(xml.contains("<Currency/></OrderHeader><OrderDetails/></OrderRequest>"));
        assert!(xml.ends_with("</OrderRequest>\n"));
    }

    #[test]
    fn test_every_header_element_present() {
        let xml = generate(&OrderRecord::default());
        for name in crate::HEADER_ELEMENTS {
            let present = xml.contains(&format!("<{name}/>")) || xml.contains(&format!("<{name}>"));
            assert!(present, "missing header element {name}");
        }
    }

    #[test]
    fn test_detail_per_item() {
        let mut order = OrderRecord::default();
        order.push_item(ItemRecord::new("1", "111"));
        order.push_item(ItemRecord::new("2", "222"));

        let xml = generate(&order);
        assert_eq!(xml.matches("<Detail>").count(), 2);
        assert_eq!(xml.matches("<ItemBestBeforeDate/>").count(), 2);
        assert!(xml.contains("<Detail><DetailNumber>1</DetailNumber><ItemEanBarcode>111</ItemEanBarcode><ItemSenderCode/>"));

        let first = xml.find("<DetailNumber>1<").unwrap();
        let second = xml.find("<DetailNumber>2<").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut order = OrderRecord::default();
        order.free_text_field = "Fish & <Chips>".to_string();

        let xml = generate(&order);
        assert!(xml.contains("<FreeTextField>Fish &amp; &lt;Chips&gt;</FreeTextField>"));
        assert!(!xml.contains("<Chips>"));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let mut order = OrderRecord::default();
        order.order_number = "PO1".to_string();
        order.push_item(ItemRecord::new("1", "111"));

        assert_eq!(generate(&order), generate(&order));
    }

    #[test]
    fn test_pretty_output_indents() {
        let xml = XmlGenerator::new()
            .pretty(true)
            .generate(&OrderRecord::default(), &NullSink)
            .unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<OrderRequest>"));
        assert!(xml.contains("\n  <OrderHeader>"));
        assert!(xml.contains("<Snrf>173831239</Snrf>"));
        assert!(xml.ends_with("</OrderRequest>\n"));
    }

    #[test]
    fn test_emits_generation_events() {
        let sink = RecordingSink::new();
        XmlGenerator::new()
            .generate(&OrderRecord::default(), &sink)
            .unwrap();
        assert_eq!(
            sink.infos(),
            vec!["Generating XML...", "XML generation completed."]
        );
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let mut order = OrderRecord::default();
        order.free_text_field = "bell\u{1}here".to_string();
        order.order_number = "\u{0}\u{B}\u{C}\u{1F}".to_string();
        let mut item = ItemRecord::new("1", "4000862141404");
        item.item_description = "tab\there\u{8}\u{FFFE}".to_string();
        order.push_item(item);

        let xml = generate(&order);

        assert!(xml.contains("<FreeTextField>bellhere</FreeTextField>"));
        assert!(xml.contains("<OrderNumber/>"));
        assert!(xml.contains("<ItemDescription>tab\there</ItemDescription>"));
        assert!(!xml.chars().any(|c| !is_xml_char(c)));
    }

    #[test]
    fn test_xml_text_borrows_clean_values() {
        assert!(matches!(xml_text("Blue <widget> \u{E9}\u{1F600}"), Cow::Borrowed(_)));
        assert_eq!(xml_text("a\u{7F}\u{1B}b"), "a\u{7F}b");
    }
}
