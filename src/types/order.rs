//! Order types.

use super::collection::{Keyed, KeyedCollection};
use super::common::{InvoiceFormat, InvoiceType, OperatorCode};
use crate::error::{DomainError, ResponseError, SellerCenterError};
use base64::Engine;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Orders keyed by order id.
pub type Orders = KeyedCollection<Order>;
/// Order items keyed by order item id.
pub type OrderItems = KeyedCollection<OrderItem>;

/// Billing or shipping address of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Main phone.
    pub phone: String,
    /// Secondary phone.
    pub phone2: String,
    /// Address lines.
    pub address1: String,
    /// Address line 2.
    pub address2: String,
    /// Address line 3.
    pub address3: String,
    /// Address line 4.
    pub address4: String,
    /// Address line 5.
    pub address5: String,
    /// Customer e-mail.
    pub customer_email: String,
    /// City.
    pub city: String,
    /// Ward or district.
    pub ward: String,
    /// Region.
    pub region: String,
    /// Postal code.
    pub post_code: String,
    /// Country.
    pub country: String,
}

/// A customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order id.
    pub order_id: u64,
    /// Customer first name.
    pub customer_first_name: String,
    /// Customer last name.
    pub customer_last_name: String,
    /// Customer facing order number.
    pub order_number: String,
    /// Payment method.
    pub payment_method: String,
    /// Customer remarks.
    pub remarks: Option<String>,
    /// Delivery information.
    pub delivery_info: Option<String>,
    /// Total price.
    pub price: f64,
    /// Whether the order is a gift.
    pub gift_option: bool,
    /// Gift message.
    pub gift_message: Option<String>,
    /// Voucher code.
    pub voucher_code: Option<String>,
    /// Creation date.
    pub created_at: Option<NaiveDateTime>,
    /// Last update.
    pub updated_at: Option<NaiveDateTime>,
    /// Last address update.
    pub address_updated_at: Option<NaiveDateTime>,
    /// Billing address.
    pub address_billing: Address,
    /// Shipping address.
    pub address_shipping: Address,
    /// Customer national registration number.
    pub national_registration_number: Option<String>,
    /// Number of items.
    pub items_count: u32,
    /// Promised shipping time.
    pub promised_shipping_time: Option<NaiveDateTime>,
    /// Extra attributes, as sent by the platform.
    pub extra_attributes: Option<String>,
    /// Statuses of the order items.
    pub statuses: Vec<String>,
    /// Items, when the order was fetched together with them.
    #[serde(skip)]
    pub order_items: OrderItems,
}

impl Order {
    /// Create a partial order carrying only its items.
    pub fn from_items(order_id: u64, order_number: impl Into<String>, items: OrderItems) -> Self {
        Self {
            order_id,
            order_number: order_number.into(),
            order_items: items,
            ..Self::default()
        }
    }

    /// Replace the order items.
    pub fn with_items(mut self, items: OrderItems) -> Self {
        self.order_items = items;
        self
    }
}

impl Keyed for Order {
    fn key(&self) -> String {
        self.order_id.to_string()
    }
}

/// A single item of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Order item id.
    pub order_item_id: u64,
    /// Shop id.
    pub shop_id: String,
    /// Order the item belongs to.
    pub order_id: u64,
    /// Product name.
    pub name: String,
    /// Seller SKU.
    pub sku: String,
    /// Variation.
    pub variation: Option<String>,
    /// Marketplace SKU.
    pub shop_sku: String,
    /// Shipping type.
    pub shipping_type: String,
    /// Item price.
    pub item_price: f64,
    /// Price paid by the customer.
    pub paid_price: f64,
    /// Currency.
    pub currency: String,
    /// Wallet credits used.
    pub wallet_credits: f64,
    /// Tax amount.
    pub tax_amount: f64,
    /// Amount collectable on delivery.
    pub cod_collectable_amount: f64,
    /// Shipping amount.
    pub shipping_amount: f64,
    /// Shipping service cost.
    pub shipping_service_cost: f64,
    /// Voucher amount.
    pub voucher_amount: f64,
    /// Voucher code.
    pub voucher_code: Option<String>,
    /// Item status.
    pub status: String,
    /// Whether the item can be processed.
    pub is_processable: bool,
    /// Shipment provider.
    pub shipment_provider: Option<String>,
    /// Whether the item is delivered digitally.
    pub is_digital: bool,
    /// Digital delivery information.
    pub digital_delivery_info: Option<String>,
    /// Tracking code.
    pub tracking_code: Option<String>,
    /// Pre-assigned tracking code.
    pub tracking_code_pre: Option<String>,
    /// Cancel or return reason.
    pub reason: Option<String>,
    /// Reason detail.
    pub reason_detail: Option<String>,
    /// Purchase order id.
    pub purchase_order_id: u64,
    /// Purchase order number.
    pub purchase_order_number: String,
    /// Package id.
    pub package_id: String,
    /// Promised shipping time.
    pub promised_shipping_time: Option<NaiveDateTime>,
    /// Extra attributes, as sent by the platform.
    pub extra_attributes: Option<String>,
    /// Shipping provider type.
    pub shipping_provider_type: Option<String>,
    /// Creation date.
    pub created_at: Option<NaiveDateTime>,
    /// Last update.
    pub updated_at: Option<NaiveDateTime>,
    /// Return status.
    pub return_status: Option<String>,
    /// Device IMEI, set by the seller before [`set_imei`](crate::services::OrdersService::set_imei).
    pub imei: Option<String>,
}

impl OrderItem {
    /// Create a partial item as returned by status changes.
    pub fn from_status(
        order_item_id: u64,
        purchase_order_id: u64,
        purchase_order_number: impl Into<String>,
        package_id: impl Into<String>,
    ) -> Self {
        Self {
            order_item_id,
            purchase_order_id,
            purchase_order_number: purchase_order_number.into(),
            package_id: package_id.into(),
            ..Self::default()
        }
    }

    /// Create an item identified only by its id.
    pub fn with_id(order_item_id: u64) -> Self {
        Self {
            order_item_id,
            ..Self::default()
        }
    }

    /// Set the device IMEI.
    pub fn with_imei(mut self, imei: impl Into<String>) -> Self {
        self.imei = Some(imei.into());
        self
    }
}

impl Keyed for OrderItem {
    fn key(&self) -> String {
        self.order_item_id.to_string()
    }
}

/// A reason that can be given when canceling an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReason {
    /// Reason type, e.g. `canceled`.
    pub reason_type: String,
    /// Reason name.
    pub name: String,
}

/// A carrier available to the seller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentProvider {
    /// Provider name.
    pub name: String,
    /// Whether it is the default provider.
    pub is_default: bool,
    /// Whether the provider is integrated through the API.
    pub api_integration: bool,
    /// Whether cash on delivery is supported.
    pub cod: bool,
    /// Regular expression validating tracking codes.
    pub tracking_code_validation_regex: Option<String>,
    /// Example tracking code.
    pub tracking_code_example: Option<String>,
    /// Tracking URL template.
    pub tracking_url: Option<String>,
    /// Delivery options the provider supports.
    pub enabled_delivery_options: Vec<String>,
}

/// A document generated for order items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document type.
    pub document_type: String,
    /// MIME type of the file.
    pub mime_type: String,
    /// Base64 encoded file content.
    pub file: String,
}

impl Document {
    /// Decode the file content.
    pub fn decode(&self) -> Result<Vec<u8>, SellerCenterError> {
        base64::engine::general_purpose::STANDARD
            .decode(self.file.trim())
            .map_err(|e| {
                SellerCenterError::Response(ResponseError::InvalidValue {
                    entity: "Document".to_string(),
                    field: "File".to_string(),
                    value: e.to_string(),
                })
            })
    }
}

/// Invoice uploaded for a set of order items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    /// Items the invoice covers.
    pub order_item_ids: Vec<u64>,
    /// Invoice number.
    pub invoice_number: String,
    /// Issue date.
    pub invoice_date: NaiveDate,
    /// Invoice type.
    pub invoice_type: InvoiceType,
    /// Issuing operator.
    pub operator_code: OperatorCode,
    /// Document format.
    pub format: InvoiceFormat,
    /// Raw document content.
    pub document: Vec<u8>,
}

impl Invoice {
    /// Create an invoice, rejecting empty ids, number or document.
    pub fn new(
        order_item_ids: Vec<u64>,
        invoice_number: impl Into<String>,
        invoice_date: NaiveDate,
        invoice_type: InvoiceType,
        operator_code: OperatorCode,
        document: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let invoice_number = invoice_number.into();
        if order_item_ids.is_empty() {
            return Err(DomainError::empty("OrderItemIds"));
        }
        if invoice_number.trim().is_empty() {
            return Err(DomainError::empty("InvoiceNumber"));
        }
        if document.is_empty() {
            return Err(DomainError::empty("InvoiceDocument"));
        }

        Ok(Self {
            order_item_ids,
            invoice_number,
            invoice_date,
            invoice_type,
            operator_code,
            format: InvoiceFormat::default(),
            document,
        })
    }

    /// Set the document format.
    pub fn with_format(mut self, format: InvoiceFormat) -> Self {
        self.format = format;
        self
    }

    /// Base64 encoded document, as sent on the wire.
    pub fn encoded_document(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.document)
    }
}
