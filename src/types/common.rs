//! Enumerated request values.
//!
//! Each value parses from its wire string and rejects anything else with a
//! [`DomainError`] before a request is built.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status used to filter and report orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting for the seller.
    Pending,
    /// Canceled by the customer or the seller.
    Canceled,
    /// Packed and waiting for pickup.
    ReadyToShip,
    /// Delivered to the customer.
    Delivered,
    /// Returned by the customer.
    Returned,
    /// Handed over to the carrier.
    Shipped,
    /// Delivery failed.
    Failed,
}

impl OrderStatus {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Canceled => "canceled",
            OrderStatus::ReadyToShip => "ready_to_ship",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Returned => "returned",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Failed => "failed",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "canceled" => Ok(OrderStatus::Canceled),
            "ready_to_ship" => Ok(OrderStatus::ReadyToShip),
            "delivered" => Ok(OrderStatus::Delivered),
            "returned" => Ok(OrderStatus::Returned),
            "shipped" => Ok(OrderStatus::Shipped),
            "failed" => Ok(OrderStatus::Failed),
            _ => Err(DomainError::InvalidOrderStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Field used to sort order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Creation date.
    #[default]
    CreatedAt,
    /// Last update date.
    UpdatedAt,
}

impl SortBy {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "created_at",
            SortBy::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(SortBy::CreatedAt),
            "updated_at" => Ok(SortBy::UpdatedAt),
            _ => Err(DomainError::InvalidSortBy {
                value: s.to_string(),
            }),
        }
    }
}

/// Sort direction of listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    #[default]
    Desc,
}

impl SortDirection {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(DomainError::InvalidSortDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// How the seller hands over packed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    /// The seller ships directly to the customer.
    Dropship,
    /// The carrier picks the items up at the seller.
    Pickup,
    /// The seller sends the items to the marketplace warehouse.
    SendToWarehouse,
}

impl DeliveryType {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Dropship => "dropship",
            DeliveryType::Pickup => "pickup",
            DeliveryType::SendToWarehouse => "send_to_warehouse",
        }
    }
}

impl FromStr for DeliveryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dropship" => Ok(DeliveryType::Dropship),
            "pickup" => Ok(DeliveryType::Pickup),
            "send_to_warehouse" => Ok(DeliveryType::SendToWarehouse),
            _ => Err(DomainError::InvalidDeliveryType {
                value: s.to_string(),
            }),
        }
    }
}

/// Type of document that can be requested for order items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    /// Invoice.
    Invoice,
    /// Export invoice.
    ExportInvoice,
    /// Shipping label.
    ShippingLabel,
    /// Shipping parcel.
    ShippingParcel,
    /// Carrier manifest.
    CarrierManifest,
    /// Serial number list.
    SerialNumber,
}

impl DocumentType {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::ExportInvoice => "exportInvoice",
            DocumentType::ShippingLabel => "shippingLabel",
            DocumentType::ShippingParcel => "shippingParcel",
            DocumentType::CarrierManifest => "carrierManifest",
            DocumentType::SerialNumber => "serialNumber",
        }
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoice" => Ok(DocumentType::Invoice),
            "exportInvoice" => Ok(DocumentType::ExportInvoice),
            "shippingLabel" => Ok(DocumentType::ShippingLabel),
            "shippingParcel" => Ok(DocumentType::ShippingParcel),
            "carrierManifest" => Ok(DocumentType::CarrierManifest),
            "serialNumber" => Ok(DocumentType::SerialNumber),
            _ => Err(DomainError::InvalidDocumentType {
                value: s.to_string(),
            }),
        }
    }
}

/// Marketplace operator an invoice is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorCode {
    /// Chile.
    #[serde(rename = "FACL")]
    Chile,
    /// Peru.
    #[serde(rename = "FAPE")]
    Peru,
    /// Colombia.
    #[serde(rename = "FACO")]
    Colombia,
}

impl OperatorCode {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorCode::Chile => "FACL",
            OperatorCode::Peru => "FAPE",
            OperatorCode::Colombia => "FACO",
        }
    }
}

impl FromStr for OperatorCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FACL" => Ok(OperatorCode::Chile),
            "FAPE" => Ok(OperatorCode::Peru),
            "FACO" => Ok(OperatorCode::Colombia),
            _ => Err(DomainError::InvalidOperatorCode {
                value: s.to_string(),
            }),
        }
    }
}

/// Kind of tax document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceType {
    /// Receipt for final consumers.
    Boleta,
    /// Invoice for companies.
    Factura,
    /// Credit note.
    NotaDeCredito,
}

impl InvoiceType {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceType::Boleta => "BOLETA",
            InvoiceType::Factura => "FACTURA",
            InvoiceType::NotaDeCredito => "NOTA_DE_CREDITO",
        }
    }
}

impl FromStr for InvoiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOLETA" => Ok(InvoiceType::Boleta),
            "FACTURA" => Ok(InvoiceType::Factura),
            "NOTA_DE_CREDITO" => Ok(InvoiceType::NotaDeCredito),
            _ => Err(DomainError::InvalidInvoiceType {
                value: s.to_string(),
            }),
        }
    }
}

/// Format of an uploaded invoice document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceFormat {
    /// PDF document.
    #[default]
    Pdf,
    /// Electronic XML document.
    Xml,
}

impl InvoiceFormat {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceFormat::Pdf => "pdf",
            InvoiceFormat::Xml => "xml",
        }
    }
}

impl FromStr for InvoiceFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(InvoiceFormat::Pdf),
            "xml" => Ok(InvoiceFormat::Xml),
            _ => Err(DomainError::InvalidInvoiceFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Filter applied to product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductFilter {
    /// Every product.
    #[default]
    All,
    /// Products visible on the storefront.
    Live,
    /// Inactive products.
    Inactive,
    /// Deleted products.
    Deleted,
    /// Products without images.
    ImageMissing,
    /// Products waiting for quality control.
    Pending,
    /// Products rejected by quality control.
    Rejected,
    /// Products without stock.
    SoldOut,
}

impl ProductFilter {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductFilter::All => "all",
            ProductFilter::Live => "live",
            ProductFilter::Inactive => "inactive",
            ProductFilter::Deleted => "deleted",
            ProductFilter::ImageMissing => "image-missing",
            ProductFilter::Pending => "pending",
            ProductFilter::Rejected => "rejected",
            ProductFilter::SoldOut => "sold-out",
        }
    }
}

impl FromStr for ProductFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ProductFilter::All),
            "live" => Ok(ProductFilter::Live),
            "inactive" => Ok(ProductFilter::Inactive),
            "deleted" => Ok(ProductFilter::Deleted),
            "image-missing" => Ok(ProductFilter::ImageMissing),
            "pending" => Ok(ProductFilter::Pending),
            "rejected" => Ok(ProductFilter::Rejected),
            "sold-out" => Ok(ProductFilter::SoldOut),
            _ => Err(DomainError::InvalidProductFilter {
                value: s.to_string(),
            }),
        }
    }
}

/// Publication status of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Published.
    #[default]
    Active,
    /// Hidden from the storefront.
    Inactive,
    /// Removed.
    Deleted,
}

impl ProductStatus {
    /// Returns the API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Deleted => "deleted",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProductStatus::Active),
            "inactive" => Ok(ProductStatus::Inactive),
            "deleted" => Ok(ProductStatus::Deleted),
            _ => Err(DomainError::InvalidProductStatus {
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(
    OrderStatus,
    SortBy,
    SortDirection,
    DeliveryType,
    DocumentType,
    OperatorCode,
    InvoiceType,
    InvoiceFormat,
    ProductFilter,
    ProductStatus,
);
