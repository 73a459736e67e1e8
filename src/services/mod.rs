//! Seller Center service implementations.
//!
//! One service per resource area:
//! - Orders: listing, items, status changes, invoices and documents
//! - Products: listing, create/update/remove feeds, images, QC status
//! - Feeds: feed status, listing and cancellation
//! - Webhooks: registration and event discovery
//! - Catalog: category tree, attributes, attribute sets, brands

mod catalog;
mod feeds;
mod orders;
mod products;
mod webhooks;

pub use catalog::CatalogService;
pub use feeds::FeedsService;
pub use orders::OrdersService;
pub use products::ProductsService;
pub use webhooks::WebhooksService;

use crate::error::{DomainError, ResponseError, SellerCenterError};
use crate::factories::FromXml;
use crate::response::SuccessResponse;
use crate::xml::Node;

/// Named child of the response body.
pub(crate) fn body_section<'a>(
    response: &'a SuccessResponse,
    name: &str,
) -> Result<&'a Node, SellerCenterError> {
    response.body().child(name).ok_or_else(|| {
        SellerCenterError::Response(ResponseError::MissingField {
            field: format!("Body/{}", name),
        })
    })
}

/// Build a collection from a body section; an absent or childless section is
/// an empty collection.
pub(crate) fn body_collection<T>(response: &SuccessResponse, name: &str) -> Result<T, SellerCenterError>
where
    T: FromXml + Default,
{
    match response.body().child(name) {
        Some(section) if !section.children().is_empty() => T::from_xml(section),
        _ => Ok(T::default()),
    }
}

/// Reject an empty list argument.
pub(crate) fn require_non_empty<T>(values: &[T], argument: &str) -> Result<(), SellerCenterError> {
    if values.is_empty() {
        return Err(DomainError::empty(argument).into());
    }
    Ok(())
}

/// Reject a blank string argument.
pub(crate) fn require_text(value: &str, argument: &str) -> Result<(), SellerCenterError> {
    if value.trim().is_empty() {
        return Err(DomainError::empty(argument).into());
    }
    Ok(())
}
