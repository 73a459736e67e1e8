//! Order factories.

use super::{collect, collect_nested, CollectionItem, Fields, FromXml, Result};
use crate::error::StructuralError;
use crate::types::{
    Address, Document, FailureReason, Order, OrderItem, OrderItems, Orders, ShipmentProvider,
};
use crate::xml::Node;

const ADDRESS_FIELDS: &[&str] = &[
    "FirstName",
    "LastName",
    "Phone",
    "Phone2",
    "Address1",
    "Address2",
    "Address3",
    "Address4",
    "Address5",
    "CustomerEmail",
    "City",
    "Ward",
    "Region",
    "PostCode",
    "Country",
];

const ORDER_FIELDS: &[&str] = &[
    "OrderId",
    "CustomerFirstName",
    "CustomerLastName",
    "OrderNumber",
    "PaymentMethod",
    "Remarks",
    "DeliveryInfo",
    "Price",
    "GiftOption",
    "GiftMessage",
    "VoucherCode",
    "CreatedAt",
    "UpdatedAt",
    "AddressUpdatedAt",
    "AddressBilling",
    "AddressShipping",
    "NationalRegistrationNumber",
    "ItemsCount",
    "PromisedShippingTime",
    "ExtraAttributes",
    "Statuses",
];

const ORDER_WITH_ITEMS_FIELDS: &[&str] = &["OrderId", "OrderNumber", "OrderItems"];

const ORDER_ITEM_FIELDS: &[&str] = &[
    "OrderItemId",
    "ShopId",
    "OrderId",
    "Name",
    "Sku",
    "Variation",
    "ShopSku",
    "ShippingType",
    "ItemPrice",
    "PaidPrice",
    "Currency",
    "WalletCredits",
    "TaxAmount",
    "CodCollectableAmount",
    "ShippingAmount",
    "ShippingServiceCost",
    "VoucherAmount",
    "VoucherCode",
    "Status",
    "IsProcessable",
    "ShipmentProvider",
    "IsDigital",
    "DigitalDeliveryInfo",
    "TrackingCode",
    "TrackingCodePre",
    "Reason",
    "ReasonDetail",
    "PurchaseOrderId",
    "PurchaseOrderNumber",
    "PackageId",
    "PromisedShippingTime",
    "ExtraAttributes",
    "ShippingProviderType",
    "CreatedAt",
    "UpdatedAt",
    "ReturnStatus",
];

const ORDER_ITEM_STATUS_FIELDS: &[&str] = &[
    "OrderItemId",
    "PurchaseOrderId",
    "PurchaseOrderNumber",
    "PackageId",
];

const SHIPMENT_PROVIDER_FIELDS: &[&str] = &[
    "Name",
    "Default",
    "ApiIntegration",
    "Cod",
    "TrackingCodeValidationRegex",
    "TrackingCodeExample",
    "TrackingUrl",
    "EnabledDeliveryOptions",
];

impl FromXml for Address {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Address", node, ADDRESS_FIELDS)?;
        Ok(Address {
            first_name: f.string("FirstName"),
            last_name: f.string("LastName"),
            phone: f.string("Phone"),
            phone2: f.string("Phone2"),
            address1: f.string("Address1"),
            address2: f.string("Address2"),
            address3: f.string("Address3"),
            address4: f.string("Address4"),
            address5: f.string("Address5"),
            customer_email: f.string("CustomerEmail"),
            city: f.string("City"),
            ward: f.string("Ward"),
            region: f.string("Region"),
            post_code: f.string("PostCode"),
            country: f.string("Country"),
        })
    }
}

impl FromXml for Order {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Order", node, ORDER_FIELDS)?;
        let address = |name: &str| -> Result<Address> {
            match f.child(name) {
                Some(child) => Address::from_xml(child),
                None => Err(StructuralError::missing("Order", name).into()),
            }
        };

        Ok(Order {
            order_id: f.number("OrderId")?,
            customer_first_name: f.string("CustomerFirstName"),
            customer_last_name: f.string("CustomerLastName"),
            order_number: f.string("OrderNumber"),
            payment_method: f.string("PaymentMethod"),
            remarks: f.opt_string("Remarks"),
            delivery_info: f.opt_string("DeliveryInfo"),
            price: f.number("Price")?,
            gift_option: f.flag("GiftOption")?,
            gift_message: f.opt_string("GiftMessage"),
            voucher_code: f.opt_string("VoucherCode"),
            created_at: f.datetime("CreatedAt")?,
            updated_at: f.datetime("UpdatedAt")?,
            address_updated_at: f.datetime("AddressUpdatedAt")?,
            address_billing: address("AddressBilling")?,
            address_shipping: address("AddressShipping")?,
            national_registration_number: f.opt_string("NationalRegistrationNumber"),
            items_count: f.number("ItemsCount")?,
            promised_shipping_time: f.datetime("PromisedShippingTime")?,
            extra_attributes: f.opt_string("ExtraAttributes"),
            statuses: f.texts("Statuses", "Status"),
            order_items: OrderItems::new(),
        })
    }
}

impl CollectionItem for Order {
    const PLURAL: &'static str = "Orders";
    const SINGULAR: &'static str = "Order";
}

impl FromXml for Orders {
    fn from_xml(node: &Node) -> Result<Self> {
        Ok(Vec::<Order>::from_xml(node)?.into_iter().collect())
    }
}

/// Build an order carrying only its id, number and items.
pub fn order_with_items(node: &Node) -> Result<Order> {
    let f = Fields::require("Order", node, ORDER_WITH_ITEMS_FIELDS)?;
    let items = match f.child("OrderItems") {
        Some(list) => collect_nested(list, "OrderItem", OrderItem::from_xml)?,
        None => Vec::new(),
    };

    Ok(Order::from_items(
        f.number("OrderId")?,
        f.string("OrderNumber"),
        items.into_iter().collect(),
    ))
}

/// Build the orders of a `GetMultipleOrderItems` response.
pub fn orders_with_items(node: &Node) -> Result<Orders> {
    Ok(collect(node, "Orders", "Order", order_with_items)?
        .into_iter()
        .collect())
}

impl FromXml for OrderItem {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("OrderItem", node, ORDER_ITEM_FIELDS)?;
        Ok(OrderItem {
            order_item_id: f.number("OrderItemId")?,
            shop_id: f.string("ShopId"),
            order_id: f.number("OrderId")?,
            name: f.string("Name"),
            sku: f.string("Sku"),
            variation: f.opt_string("Variation"),
            shop_sku: f.string("ShopSku"),
            shipping_type: f.string("ShippingType"),
            item_price: f.number("ItemPrice")?,
            paid_price: f.number("PaidPrice")?,
            currency: f.string("Currency"),
            wallet_credits: f.number("WalletCredits")?,
            tax_amount: f.number("TaxAmount")?,
            cod_collectable_amount: f.number("CodCollectableAmount")?,
            shipping_amount: f.number("ShippingAmount")?,
            shipping_service_cost: f.number("ShippingServiceCost")?,
            voucher_amount: f.number("VoucherAmount")?,
            voucher_code: f.opt_string("VoucherCode"),
            status: f.string("Status"),
            is_processable: f.flag("IsProcessable")?,
            shipment_provider: f.opt_string("ShipmentProvider"),
            is_digital: f.flag("IsDigital")?,
            digital_delivery_info: f.opt_string("DigitalDeliveryInfo"),
            tracking_code: f.opt_string("TrackingCode"),
            tracking_code_pre: f.opt_string("TrackingCodePre"),
            reason: f.opt_string("Reason"),
            reason_detail: f.opt_string("ReasonDetail"),
            purchase_order_id: f.number("PurchaseOrderId")?,
            purchase_order_number: f.string("PurchaseOrderNumber"),
            package_id: f.string("PackageId"),
            promised_shipping_time: f.datetime("PromisedShippingTime")?,
            extra_attributes: f.opt_string("ExtraAttributes"),
            shipping_provider_type: f.opt_string("ShippingProviderType"),
            created_at: f.datetime("CreatedAt")?,
            updated_at: f.datetime("UpdatedAt")?,
            return_status: f.opt_string("ReturnStatus"),
            imei: f.opt_string("Imei"),
        })
    }
}

impl CollectionItem for OrderItem {
    const PLURAL: &'static str = "OrderItems";
    const SINGULAR: &'static str = "OrderItem";
}

impl FromXml for OrderItems {
    fn from_xml(node: &Node) -> Result<Self> {
        Ok(Vec::<OrderItem>::from_xml(node)?.into_iter().collect())
    }
}

fn order_item_from_status(node: &Node) -> Result<OrderItem> {
    let f = Fields::require("OrderItem", node, ORDER_ITEM_STATUS_FIELDS)?;
    let mut item = OrderItem::from_status(
        f.number("OrderItemId")?,
        f.number("PurchaseOrderId")?,
        f.string("PurchaseOrderNumber"),
        f.string("PackageId"),
    );
    item.imei = f.opt_string("Imei");
    Ok(item)
}

/// Build the partial items returned by status changes.
pub fn order_items_from_status(node: &Node) -> Result<OrderItems> {
    Ok(collect(node, "OrderItems", "OrderItem", order_item_from_status)?
        .into_iter()
        .collect())
}

fn order_item_with_imei(node: &Node) -> Result<OrderItem> {
    let f = Fields::require("OrderItem", node, &["OrderItemId", "Imei"])?;
    let mut item = OrderItem::with_id(f.number("OrderItemId")?);
    item.imei = f.opt_string("Imei");
    Ok(item)
}

/// Build items carrying only their id and IMEI.
pub fn order_items_with_imei(node: &Node) -> Result<OrderItems> {
    Ok(collect(node, "OrderItems", "OrderItem", order_item_with_imei)?
        .into_iter()
        .collect())
}

impl FromXml for FailureReason {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Reason", node, &["Type", "Name"])?;
        Ok(FailureReason {
            reason_type: f.string("Type"),
            name: f.string("Name"),
        })
    }
}

impl CollectionItem for FailureReason {
    const PLURAL: &'static str = "Reasons";
    const SINGULAR: &'static str = "Reason";
}

impl FromXml for ShipmentProvider {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("ShipmentProvider", node, SHIPMENT_PROVIDER_FIELDS)?;
        Ok(ShipmentProvider {
            name: f.string("Name"),
            is_default: f.flag("Default")?,
            api_integration: f.flag("ApiIntegration")?,
            cod: f.flag("Cod")?,
            tracking_code_validation_regex: f.opt_string("TrackingCodeValidationRegex"),
            tracking_code_example: f.opt_string("TrackingCodeExample"),
            tracking_url: f.opt_string("TrackingUrl"),
            enabled_delivery_options: f.texts("EnabledDeliveryOptions", "DeliveryOption"),
        })
    }
}

impl CollectionItem for ShipmentProvider {
    const PLURAL: &'static str = "ShipmentProviders";
    const SINGULAR: &'static str = "ShipmentProvider";
}

impl FromXml for Document {
    fn from_xml(node: &Node) -> Result<Self> {
        let f = Fields::require("Document", node, &["DocumentType", "MimeType", "File"])?;
        Ok(Document {
            document_type: f.string("DocumentType"),
            mime_type: f.string("MimeType"),
            file: f.string("File"),
        })
    }
}

impl CollectionItem for Document {
    const PLURAL: &'static str = "Documents";
    const SINGULAR: &'static str = "Document";
}
