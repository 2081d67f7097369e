//! Order header representation
#![allow(clippy::must_use_candidate)] // Plain accessors on a data record.

use crate::item::ItemRecord;
use serde::{Deserialize, Serialize};

/// Reference number written as `Snrf` when nothing else is known
pub const DEFAULT_DOCUMENT_REFERENCE_NUMBER: &str = "173831239";

/// Document time written when the interchange carries none
pub const DEFAULT_DOCUMENT_TIME: &str = "1625";

/// Order type of every converted purchase order
pub const DEFAULT_ORDER_TYPE: &str = "Original order";

/// Header of a purchase order plus its line items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Document reference number (`Snrf`)
    pub document_reference_number: String,
    pub document_date: String,
    pub document_time: String,
    /// Interchange sender (UNB)
    pub sender_mailbox_id: String,
    /// Interchange recipient (UNB)
    pub receiver_mailbox_id: String,
    pub order_type: String,
    pub order_number: String,
    pub order_date: String,
    pub delivery_date: String,
    pub delivery_date_earliest: String,
    pub delivery_date_latest: String,
    pub free_text_field: String,
    pub promotion_deal_number: String,

    /// Buyer party (NAD+BY)
    pub buyer: Party,
    /// Delivery party (NAD+DP)
    pub ship_to: Party,
    /// Invoicee party, never filled from input
    pub invoicee: Party,
    /// Supplier party (NAD+SU)
    pub supplier: Party,
    /// Supplier's own code for the buyer relationship
    pub supplier_code: String,

    pub currency: String,

    /// Line items, in order of appearance
    pub order_details: Vec<ItemRecord>,
}

impl Default for OrderRecord {
    fn default() -> Self {
        Self {
            document_reference_number: DEFAULT_DOCUMENT_REFERENCE_NUMBER.to_string(),
            document_date: String::new(),
            document_time: DEFAULT_DOCUMENT_TIME.to_string(),
            sender_mailbox_id: String::new(),
            receiver_mailbox_id: String::new(),
            order_type: DEFAULT_ORDER_TYPE.to_string(),
            order_number: String::new(),
            order_date: String::new(),
            delivery_date: String::new(),
            delivery_date_earliest: String::new(),
            delivery_date_latest: String::new(),
            free_text_field: String::new(),
            promotion_deal_number: String::new(),
            buyer: Party::default(),
            ship_to: Party::default(),
            invoicee: Party::default(),
            supplier: Party::default(),
            supplier_code: String::new(),
            currency: String::new(),
            order_details: Vec::new(),
        }
    }
}

impl OrderRecord {
    /// Create an order with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Party block for a role
    pub fn party(&self, role: PartyRole) -> &Party {
        match role {
            PartyRole::Buyer => &self.buyer,
            PartyRole::ShipTo => &self.ship_to,
            PartyRole::Invoicee => &self.invoicee,
            PartyRole::Supplier => &self.supplier,
        }
    }

    /// Mutable party block for a role
    pub fn party_mut(&mut self, role: PartyRole) -> &mut Party {
        match role {
            PartyRole::Buyer => &mut self.buyer,
            PartyRole::ShipTo => &mut self.ship_to,
            PartyRole::Invoicee => &mut self.invoicee,
            PartyRole::Supplier => &mut self.supplier,
        }
    }

    /// Append a finished line item
    pub fn push_item(&mut self, item: ItemRecord) {
        self.order_details.push(item);
    }

    /// Number of line items
    pub fn item_count(&self) -> usize {
        self.order_details.len()
    }
}

/// Name and address block of a trading party
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Global Location Number
    pub gln: String,
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
}

/// Role a party plays in the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    Buyer,
    ShipTo,
    Invoicee,
    Supplier,
}

impl PartyRole {
    /// Resolve a NAD party qualifier.
    ///
    /// Matching is by substring, checked in the order `BY`, `DP`, `SU`,
    /// so a composite qualifier such as `"BY:ZZ"` still selects the buyer.
    /// Invoicee is never selected.
    pub fn from_qualifier(qualifier: &str) -> Option<Self> {
        if qualifier.contains("BY") {
            Some(Self::Buyer)
        } else if qualifier.contains("DP") {
            Some(Self::ShipTo)
        } else if qualifier.contains("SU") {
            Some(Self::Supplier)
        } else {
            None
        }
    }
}
