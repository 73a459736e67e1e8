//! Seller Center SDK
//!
//! Typed, signed client for the Seller Center marketplace administration API.
//!
//! # Features
//!
//! - **Request signing**: HMAC-SHA256 over the canonical query string
//! - **Typed entities**: Orders, order items, products, feeds, webhooks,
//!   categories, attributes and brands built from the XML responses with
//!   strict structural validation
//! - **Write documents**: Product, image, IMEI, invoice and webhook request
//!   bodies
//! - **Typed errors**: API error envelopes, structural errors and local
//!   validation failures kept apart
//! - **Observability**: `tracing` spans and structured events
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use seller_center::{GetOrdersParameters, OrderStatus, SellerCenterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), seller_center::SellerCenterError> {
//!     // Create client from environment
//!     let client = seller_center::create_client_from_env()?;
//!
//!     // List pending orders
//!     let orders = client
//!         .orders()
//!         .get_orders(GetOrdersParameters::new().status(OrderStatus::Pending))
//!         .await?;
//!
//!     for order in &orders {
//!         println!("{} {}", order.order_number, order.price);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod factories;
pub mod mocks;
pub mod parameters;
pub mod response;
pub mod services;
pub mod signing;
pub mod transformers;
pub mod transport;
pub mod types;
pub mod xml;

// Re-export main types at crate root
pub use client::{RequestExecutor, SellerCenterClient, SellerCenterClientBuilder, SellerCenterClientImpl};
pub use config::{SellerCenterConfig, SellerCenterConfigBuilder};
pub use error::{
    ApiError, ApiErrorDetail, ApiErrorKind, ConfigurationError, DomainError, NetworkError,
    ResponseError, SellerCenterError, StructuralError,
};
pub use factories::FromXml;
pub use parameters::{ParameterSet, ParameterValue};
pub use response::SuccessResponse;
pub use services::{
    CatalogService, FeedsService, OrdersService, ProductsService, WebhooksService,
};
pub use signing::Signature;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{
    // Request types
    GetOrdersParameters,
    GetProductsParameters,
    Invoice,
    // Entities
    Address,
    Attribute,
    AttributeOption,
    AttributeSet,
    Brand,
    Category,
    Document,
    FailureReason,
    FailureReport,
    Feed,
    FeedError,
    FeedResponse,
    FeedWarning,
    Order,
    OrderItem,
    OrderItems,
    Orders,
    Product,
    ProductData,
    ProductImage,
    Products,
    QcStatus,
    ShipmentProvider,
    Webhook,
    WebhookEntity,
    WebhookEvent,
    // Common types
    DeliveryType,
    DocumentType,
    InvoiceFormat,
    InvoiceType,
    Keyed,
    KeyedCollection,
    OperatorCode,
    OrderStatus,
    ProductFilter,
    ProductStatus,
    SortBy,
    SortDirection,
};

/// Create a new client from environment variables.
///
/// This will read configuration from:
/// - `SELLER_CENTER_ENDPOINT` for the API endpoint
/// - `SELLER_CENTER_USER_ID` and `SELLER_CENTER_API_KEY` for the account
/// - `SELLER_CENTER_VERSION` for the API version
/// - `SELLER_CENTER_TIMEOUT_MS` for the read timeout
///
/// # Example
///
/// ```rust,no_run
/// let client = seller_center::create_client_from_env()?;
/// # Ok::<(), seller_center::SellerCenterError>(())
/// ```
pub fn create_client_from_env() -> Result<impl SellerCenterClient> {
    SellerCenterClientBuilder::new().from_env().build()
}

/// Create a new client with explicit configuration.
///
/// # Example
///
/// ```rust,no_run
/// use seller_center::SellerCenterConfig;
///
/// let config = SellerCenterConfig::builder()
///     .endpoint("https://sellercenter-api.example.com/")?
///     .user_id("seller@example.com")
///     .api_key("my-api-key")
///     .build()?;
///
/// let client = seller_center::create_client(config)?;
/// # Ok::<(), seller_center::SellerCenterError>(())
/// ```
pub fn create_client(config: SellerCenterConfig) -> Result<impl SellerCenterClient> {
    SellerCenterClientBuilder::new().config(config).build()
}

/// Result type alias for Seller Center operations.
pub type Result<T> = std::result::Result<T, SellerCenterError>;
