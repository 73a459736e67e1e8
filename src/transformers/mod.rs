//! Building XML request documents for write actions.
//!
//! Every document starts with the XML declaration and a `<Request>` root.

mod order;
mod product;
mod webhook;

pub use order::{invoice, order_items_imei};
pub use product::{product_images, products, products_remove};
pub use webhook::{webhook_create, webhook_delete};

/// Date format used in request documents.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Root element of every request document.
pub const REQUEST_ROOT: &str = "Request";
