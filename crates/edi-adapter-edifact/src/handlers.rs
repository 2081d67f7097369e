//! Segment tag dispatch table
//!
//! Each supported tag maps to a plain function that reads positional
//! elements and writes into the parse state. Adding a tag means adding a
//! function and a table row.

use edi_order::{ItemRecord, PartyRole};

use crate::fields::Fields;
use crate::parser::ParseState;

/// Applies one segment to the parse state
pub type Handler = fn(&mut ParseState, &Fields<'_>);

/// Date/time qualifier for the order (document) date
pub const DTM_ORDER_DATE: &str = "137";
/// Date/time qualifier for the requested delivery date
pub const DTM_DELIVERY_DATE: &str = "2";
/// PIA qualifier marking the supplier's article number
pub const PIA_SUPPLIER_ARTICLE: &str = "SA";

const HANDLERS: &[(&str, Handler)] = &[
    ("UNB", interchange_header),
    ("NAD", name_and_address),
    ("BGM", beginning_of_message),
    ("DTM", date_time),
    ("FTX", free_text),
    ("CUX", currency),
    ("LIN", line_item),
    ("PIA", additional_product_id),
    ("IMD", item_description),
    ("QTY", quantity),
    ("PRI", price),
];

/// Look up the handler for a segment tag
pub fn handler_for(tag: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, handler)| *handler)
}

fn interchange_header(state: &mut ParseState, fields: &Fields<'_>) {
    let order = state.order_mut();
    order.sender_mailbox_id = fields.component(2, 0).to_string();
    order.receiver_mailbox_id = fields.component(3, 0).to_string();
}

fn name_and_address(state: &mut ParseState, fields: &Fields<'_>) {
    if let Some(role) = PartyRole::from_qualifier(fields.field(1)) {
        state.order_mut().party_mut(role).gln = fields.component(2, 0).to_string();
    }
}

fn beginning_of_message(state: &mut ParseState, fields: &Fields<'_>) {
    state.order_mut().order_number = fields.field(2).to_string();
}

fn date_time(state: &mut ParseState, fields: &Fields<'_>) {
    let value = fields.component(1, 1);
    let order = state.order_mut();
    match fields.component(1, 0) {
        DTM_ORDER_DATE => {
            order.order_date = value.to_string();
            order.document_date = value.to_string();
        }
        DTM_DELIVERY_DATE => order.delivery_date = value.to_string(),
        _ => {}
    }
}

fn free_text(state: &mut ParseState, fields: &Fields<'_>) {
    state.order_mut().free_text_field = fields.field(4).to_string();
}

fn currency(state: &mut ParseState, fields: &Fields<'_>) {
    state.order_mut().currency = fields.component(1, 1).to_string();
}

fn line_item(state: &mut ParseState, fields: &Fields<'_>) {
    state.open_item(ItemRecord::new(fields.field(1), fields.component(3, 0)));
}

fn additional_product_id(state: &mut ParseState, fields: &Fields<'_>) {
    if !fields.field(2).contains(PIA_SUPPLIER_ARTICLE) {
        return;
    }
    if let Some(item) = state.item_mut() {
        item.item_receiver_code = fields.component(2, 0).to_string();
    }
}

fn item_description(state: &mut ParseState, fields: &Fields<'_>) {
    if let Some(item) = state.item_mut() {
        item.item_description = fields.field(3).to_string();
    }
}

fn quantity(state: &mut ParseState, fields: &Fields<'_>) {
    if let Some(item) = state.item_mut() {
        item.item_ordered_quantity = fields.component(1, 1).to_string();
        item.item_ordered_quantity_uom = fields.component(1, 2).to_string();
    }
}

fn price(state: &mut ParseState, fields: &Fields<'_>) {
    if let Some(item) = state.item_mut() {
        item.item_net_price = fields.component(1, 1).to_string();
    }
}
