//! Output element names and their record fields, in document order

use edi_order::{ItemRecord, OrderRecord};

/// Children of `OrderHeader`
pub const HEADER_ELEMENTS: [&str; 39] = [
    "Snrf",
    "DocumentDate",
    "DocumentTime",
    "SenderMailboxId",
    "ReceiverMailboxId",
    "OrderType",
    "OrderNumber",
    "OrderDate",
    "DeliveryDate",
    "DeliveryDateEarliest",
    "DeliveryDateLatest",
    "FreeTextField",
    "PromotionDealNumber",
    "GLNBuyer",
    "NameBuyer",
    "AddressBuyer",
    "PostalCodeBuyer",
    "CityBuyer",
    "CountryCodeBuyer",
    "GLNShipTo",
    "NameShipTo",
    "AddressShipTo",
    "PostalCodeShipTo",
    "CityShipTo",
    "CountryCodeShipTo",
    "GLNInvoicee",
    "NameInvoicee",
    "AddressInvoicee",
    "PostalCodeInvoicee",
    "CityInvoicee",
    "CountryCodeInvoicee",
    "GLNSupplier",
    "SupplierCode",
    "NameSupplier",
    "AddressSupplier",
    "PostalCodeSupplier",
    "CitySupplier",
    "CountryCodeSupplier",
    "Currency",
];

/// Children of each `Detail`
pub const DETAIL_ELEMENTS: [&str; 16] = [
    "DetailNumber",
    "ItemEanBarcode",
    "ItemSenderCode",
    "ItemReceiverCode",
    "ItemDescription",
    "ItemGroupId",
    "ItemGrossWeight",
    "ItemNetWeight",
    "ItemOrderedQuantity",
    "ItemOrderedQuantityUom",
    "QuantityPerPack",
    "PackageType",
    "ItemGrossPrice",
    "ItemNetPrice",
    "ItemDeliveryDate",
    "ItemBestBeforeDate",
];

/// `(element, value)` pairs for the order header
pub fn header_fields(order: &OrderRecord) -> Vec<(&'static str, &str)> {
    let (buyer, ship_to, invoicee, supplier) =
        (&order.buyer, &order.ship_to, &order.invoicee, &order.supplier);

    let values: [&String; HEADER_ELEMENTS.len()] = [
        &order.document_reference_number,
        &order.document_date,
        &order.document_time,
        &order.sender_mailbox_id,
        &order.receiver_mailbox_id,
        &order.order_type,
        &order.order_number,
        &order.order_date,
        &order.delivery_date,
        &order.delivery_date_earliest,
        &order.delivery_date_latest,
        &order.free_text_field,
        &order.promotion_deal_number,
        &buyer.gln,
        &buyer.name,
        &buyer.address,
        &buyer.postal_code,
        &buyer.city,
        &buyer.country_code,
        &ship_to.gln,
        &ship_to.name,
        &ship_to.address,
        &ship_to.postal_code,
        &ship_to.city,
        &ship_to.country_code,
        &invoicee.gln,
        &invoicee.name,
        &invoicee.address,
        &invoicee.postal_code,
        &invoicee.city,
        &invoicee.country_code,
        &supplier.gln,
        &order.supplier_code,
        &supplier.name,
        &supplier.address,
        &supplier.postal_code,
        &supplier.city,
        &supplier.country_code,
        &order.currency,
    ];

    HEADER_ELEMENTS
        .into_iter()
        .zip(values.into_iter().map(String::as_str))
        .collect()
}

/// `(element, value)` pairs for one line item
pub fn detail_fields(item: &ItemRecord) -> Vec<(&'static str, &str)> {
    let values: [&String; DETAIL_ELEMENTS.len()] = [
        &item.detail_number,
        &item.item_ean_barcode,
        &item.item_sender_code,
        &item.item_receiver_code,
        &item.item_description,
        &item.item_group_id,
        &item.item_gross_weight,
        &item.item_net_weight,
        &item.item_ordered_quantity,
        &item.item_ordered_quantity_uom,
        &item.quantity_per_pack,
        &item.package_type,
        &item.item_gross_price,
        &item.item_net_price,
        &item.item_delivery_date,
        &item.item_best_before_date,
    ];

    DETAIL_ELEMENTS
        .into_iter()
        .zip(values.into_iter().map(String::as_str))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_element_names_are_unique() {
        let header: HashSet<_> = HEADER_ELEMENTS.iter().collect();
        assert_eq!(header.len(), HEADER_ELEMENTS.len());

        let detail: HashSet<_> = DETAIL_ELEMENTS.iter().collect();
        assert_eq!(detail.len(), DETAIL_ELEMENTS.len());
    }

    #[test]
    fn test_header_fields_map_values() {
        let mut order = OrderRecord::default();
        order.order_number = "PO1".to_string();
        order.ship_to.gln = "5412345000020".to_string();
        order.supplier_code = "SUP-9".to_string();
        order.currency = "EUR".to_string();

        let fields = header_fields(&order);
        let lookup = |name: &str| fields.iter().find(|(n, _)| *n == name).unwrap().1;

        assert_eq!(fields.len(), 39);
        assert_eq!(fields[0], ("Snrf", "173831239"));
        assert_eq!(lookup("OrderNumber"), "PO1");
        assert_eq!(lookup("GLNShipTo"), "5412345000020");
        assert_eq!(lookup("SupplierCode"), "SUP-9");
        assert_eq!(lookup("GLNBuyer"), "");
        assert_eq!(fields[38], ("Currency", "EUR"));
    }

    #[test]
    fn test_detail_fields_map_values() {
        let mut item = ItemRecord::new("1", "4000862141404");
        item.item_net_price = "1.99".to_string();

        let fields = detail_fields(&item);
        assert_eq!(fields.len(), 16);
        assert_eq!(fields[0], ("DetailNumber", "1"));
        assert_eq!(fields[1], ("ItemEanBarcode", "4000862141404"));
        assert_eq!(fields[13], ("ItemNetPrice", "1.99"));
        assert_eq!(fields[15], ("ItemBestBeforeDate", ""));
    }
}
