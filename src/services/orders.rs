//! Orders service.

use super::{body_collection, body_section, require_non_empty, require_text};
use crate::client::RequestExecutor;
use crate::error::{DomainError, SellerCenterError, StructuralError};
use crate::factories::{order_items_from_status, orders_with_items, FromXml};
use crate::parameters::{json_list, ParameterSet};
use crate::transformers;
use crate::types::{
    DeliveryType, Document, DocumentType, FailureReason, GetOrdersParameters, Invoice, Order,
    OrderItems, Orders, ShipmentProvider,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Service for orders, order items and their fulfilment.
pub struct OrdersService {
    executor: Arc<RequestExecutor>,
}

impl OrdersService {
    /// Create a new orders service.
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Get a single order.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: u64) -> Result<Order, SellerCenterError> {
        let params = self.executor.parameters().with("OrderId", order_id);
        let response = self.executor.get("GetOrder", &params).await?;

        Orders::from_xml(body_section(&response, "Orders")?)?
            .into_vec()
            .into_iter()
            .next()
            .ok_or_else(|| StructuralError::missing("Orders", "Order").into())
    }

    /// List orders matching the filters.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, filters: GetOrdersParameters) -> Result<Orders, SellerCenterError> {
        let mut params = self.executor.parameters();
        filters.apply(&mut params);

        let response = self.executor.get("GetOrders", &params).await?;
        let orders: Orders = body_collection(&response, "Orders")?;

        debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    /// Get the items of an order.
    #[instrument(skip(self))]
    pub async fn get_order_items(&self, order_id: u64) -> Result<OrderItems, SellerCenterError> {
        let params = self.executor.parameters().with("OrderId", order_id);
        let response = self.executor.get("GetOrderItems", &params).await?;
        body_collection(&response, "OrderItems")
    }

    /// Get the items of several orders at once.
    #[instrument(skip(self))]
    pub async fn get_multiple_order_items(
        &self,
        order_ids: &[u64],
    ) -> Result<Orders, SellerCenterError> {
        require_non_empty(order_ids, "OrderIdList")?;

        let params = self
            .executor
            .parameters()
            .with("OrderIdList", json_list(order_ids));
        let response = self.executor.get("GetMultipleOrderItems", &params).await?;

        match response.body().child("Orders") {
            Some(orders) if !orders.children().is_empty() => orders_with_items(orders),
            _ => Ok(Orders::new()),
        }
    }

    /// Mark items as packed, letting the marketplace pick the shipping.
    #[instrument(skip(self))]
    pub async fn set_status_to_packed_by_marketplace(
        &self,
        order_item_ids: &[u64],
        delivery_type: DeliveryType,
        shipping_provider: &str,
        tracking_number: &str,
    ) -> Result<OrderItems, SellerCenterError> {
        let params = self.shipping_parameters(
            order_item_ids,
            delivery_type,
            shipping_provider,
            tracking_number,
        )?;
        self.change_status("SetStatusToPackedByMarketplace", &params)
            .await
    }

    /// Mark items as ready to ship.
    #[instrument(skip(self))]
    pub async fn set_status_to_ready_to_ship(
        &self,
        order_item_ids: &[u64],
        delivery_type: DeliveryType,
        shipping_provider: &str,
        tracking_number: &str,
        package_id: Option<&str>,
    ) -> Result<OrderItems, SellerCenterError> {
        let mut params = self.shipping_parameters(
            order_item_ids,
            delivery_type,
            shipping_provider,
            tracking_number,
        )?;
        if let Some(package_id) = package_id.filter(|p| !p.is_empty()) {
            params.insert("PackageId", package_id);
        }
        self.change_status("SetStatusToReadyToShip", &params).await
    }

    /// Cancel an order item.
    #[instrument(skip(self))]
    pub async fn set_status_to_canceled(
        &self,
        order_item_id: u64,
        reason: &str,
        reason_detail: &str,
    ) -> Result<(), SellerCenterError> {
        require_text(reason, "Reason")?;

        let params = self
            .executor
            .parameters()
            .with("OrderItemId", order_item_id)
            .with("Reason", reason)
            .with("ReasonDetail", reason_detail);
        self.executor.get("SetStatusToCanceled", &params).await?;

        info!(order_item_id, "Order item canceled");
        Ok(())
    }

    /// Attach an invoice number, and optionally a link to the document, to an item.
    #[instrument(skip(self))]
    pub async fn set_invoice_number(
        &self,
        order_item_id: u64,
        invoice_number: &str,
        document_link: Option<&str>,
    ) -> Result<(), SellerCenterError> {
        require_text(invoice_number, "InvoiceNumber")?;

        let mut params = self
            .executor
            .parameters()
            .with("OrderItemId", order_item_id)
            .with("InvoiceNumber", invoice_number);
        if let Some(link) = document_link.filter(|l| !l.is_empty()) {
            params.insert("InvoiceDocumentLink", link);
        }
        self.executor.get("SetInvoiceNumber", &params).await?;
        Ok(())
    }

    /// Upload an invoice document.
    #[instrument(skip(self, invoice), fields(invoice_number = %invoice.invoice_number))]
    pub async fn set_invoice_pdf(&self, invoice: &Invoice) -> Result<(), SellerCenterError> {
        let body = transformers::invoice(invoice);
        self.executor
            .post("SetInvoicePDF", &self.executor.parameters(), body)
            .await?;

        info!(items = invoice.order_item_ids.len(), "Invoice uploaded");
        Ok(())
    }

    /// Register the IMEI of each item.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn set_imei(&self, items: &OrderItems) -> Result<(), SellerCenterError> {
        if items.is_empty() {
            return Err(DomainError::empty("OrderItems").into());
        }
        if items
            .iter()
            .any(|item| item.imei.as_deref().map_or(true, |imei| imei.trim().is_empty()))
        {
            return Err(DomainError::empty("Imei").into());
        }

        let body = transformers::order_items_imei(items);
        self.executor
            .post("SetImei", &self.executor.parameters(), body)
            .await?;
        Ok(())
    }

    /// Reasons accepted when canceling an item.
    #[instrument(skip(self))]
    pub async fn get_failure_reasons(&self) -> Result<Vec<FailureReason>, SellerCenterError> {
        let response = self
            .executor
            .get("GetFailureReasons", &self.executor.parameters())
            .await?;
        body_collection(&response, "Reasons")
    }

    /// Shipment providers available to the seller.
    #[instrument(skip(self))]
    pub async fn get_shipment_providers(
        &self,
    ) -> Result<Vec<ShipmentProvider>, SellerCenterError> {
        let response = self
            .executor
            .get("GetShipmentProviders", &self.executor.parameters())
            .await?;
        body_collection(&response, "ShipmentProviders")
    }

    /// Get a shipping document (label, invoice, ...) for a group of items.
    #[instrument(skip(self))]
    pub async fn get_document(
        &self,
        order_item_ids: &[u64],
        document_type: DocumentType,
    ) -> Result<Document, SellerCenterError> {
        require_non_empty(order_item_ids, "OrderItemIds")?;

        let params = self
            .executor
            .parameters()
            .with("OrderItemIds", json_list(order_item_ids))
            .with("DocumentType", document_type.as_str());
        let response = self.executor.get("GetDocument", &params).await?;

        Vec::<Document>::from_xml(body_section(&response, "Documents")?)?
            .into_iter()
            .next()
            .ok_or_else(|| StructuralError::missing("Documents", "Document").into())
    }

    fn shipping_parameters(
        &self,
        order_item_ids: &[u64],
        delivery_type: DeliveryType,
        shipping_provider: &str,
        tracking_number: &str,
    ) -> Result<ParameterSet, SellerCenterError> {
        require_non_empty(order_item_ids, "OrderItemIds")?;

        Ok(self
            .executor
            .parameters()
            .with("OrderItemIds", json_list(order_item_ids))
            .with("DeliveryType", delivery_type.as_str())
            .with("ShippingProvider", shipping_provider)
            .with("TrackingNumber", tracking_number))
    }

    async fn change_status(
        &self,
        action: &str,
        params: &ParameterSet,
    ) -> Result<OrderItems, SellerCenterError> {
        let response = self.executor.get(action, params).await?;
        let items = match response.body().child("OrderItems") {
            Some(items) if !items.children().is_empty() => order_items_from_status(items)?,
            _ => OrderItems::new(),
        };

        info!(action, items = items.len(), "Order items status changed");
        Ok(items)
    }
}

impl std::fmt::Debug for OrdersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersService").finish_non_exhaustive()
    }
}
