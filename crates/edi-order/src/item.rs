//! Line item representation

use serde::{Deserialize, Serialize};

/// One ordered line item, opened by a `LIN` segment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Line number from LIN
    pub detail_number: String,
    pub item_ean_barcode: String,
    pub item_sender_code: String,
    /// Supplier article number (PIA with SA qualifier)
    pub item_receiver_code: String,
    pub item_description: String,
    pub item_group_id: String,
    pub item_gross_weight: String,
    pub item_net_weight: String,
    pub item_ordered_quantity: String,
    pub item_ordered_quantity_uom: String,
    pub quantity_per_pack: String,
    pub package_type: String,
    pub item_gross_price: String,
    pub item_net_price: String,
    pub item_delivery_date: String,
    pub item_best_before_date: String,
}

impl ItemRecord {
    /// Open a new item with every field but the identifiers left empty
    pub fn new(detail_number: impl Into<String>, ean: impl Into<String>) -> Self {
        Self {
            detail_number: detail_number.into(),
            item_ean_barcode: ean.into(),
            ..Self::default()
        }
    }
}
