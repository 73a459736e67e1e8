//! Order request documents.

use super::REQUEST_ROOT;
use crate::types::{Invoice, OrderItems};
use crate::xml::XmlBuilder;

/// Document for `SetImei`. Items without IMEI get an empty `Imei` element.
pub fn order_items_imei(items: &OrderItems) -> String {
    let mut xml = XmlBuilder::document();
    xml.open(REQUEST_ROOT).open("OrderItems");
    for item in items {
        xml.open("OrderItem")
            .element("OrderItemId", item.order_item_id)
            .element("Imei", item.imei.as_deref().unwrap_or_default())
            .close("OrderItem");
    }
    xml.close("OrderItems").close(REQUEST_ROOT);
    xml.finish()
}

/// Document for `SetInvoicePDF`.
pub fn invoice(invoice: &Invoice) -> String {
    let mut xml = XmlBuilder::document();
    xml.open(REQUEST_ROOT).open("Invoice").open("OrderItemIds");
    for id in &invoice.order_item_ids {
        xml.element("OrderItemId", id);
    }
    xml.close("OrderItemIds")
        .element("InvoiceNumber", &invoice.invoice_number)
        .element("InvoiceDate", invoice.invoice_date.format("%Y-%m-%d"))
        .element("InvoiceType", invoice.invoice_type.as_str())
        .element("OperatorCode", invoice.operator_code.as_str())
        .element("InvoiceDocumentFormat", invoice.format.as_str())
        .element("InvoiceDocument", invoice.encoded_document())
        .close("Invoice")
        .close(REQUEST_ROOT);
    xml.finish()
}
